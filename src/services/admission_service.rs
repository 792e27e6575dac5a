// src/services/admission_service.rs
//
// Write Admission
//
// The gate a caller runs before persisting a create or update:
// - the entity's record rule (validate_*)
// - every referenced identifier
// - the target identifier, on update
//
// The first failure is returned as AppError::Rejected. Nothing here
// touches storage; a passing check only means the write may proceed.

use log::{debug, warn};

use crate::config::LibraryPolicy;
use crate::domain::book::validate_copy_counts;
use crate::domain::{
    validate_author, validate_book, validate_book_copy, validate_fine, validate_loan,
    validate_reservation, validate_staff, validate_user, Author, AuthorValidator, Book, BookCopy,
    BookCopyValidator, BookValidator, DomainResult, Fine, FineValidator, Loan, LoanValidator,
    Reservation, ReservationValidator, Staff, StaffValidator, User, UserValidator,
};
use crate::error::{AppError, AppResult};

const AUTHOR: &str = "Author";
const BOOK: &str = "Book";
const BOOK_COPY: &str = "BookCopy";
const FINE: &str = "Fine";
const LOAN: &str = "Loan";
const RESERVATION: &str = "Reservation";
const STAFF: &str = "Staff";
const USER: &str = "User";

#[derive(Debug, Clone, Default)]
pub struct AdmissionService {
    policy: LibraryPolicy,
    authors: AuthorValidator,
    books: BookValidator,
    copies: BookCopyValidator,
    fines: FineValidator,
    loans: LoanValidator,
    reservations: ReservationValidator,
    staff: StaffValidator,
    users: UserValidator,
}

impl AdmissionService {
    pub fn new(policy: LibraryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> &LibraryPolicy {
        &self.policy
    }

    // ------------------------------------------------------------------
    // Author
    // ------------------------------------------------------------------

    pub fn check_create_author(&self, author: &Author) -> AppResult<()> {
        record(AUTHOR, validate_author(author))?;
        admitted(AUTHOR, author.id);
        Ok(())
    }

    pub fn check_update_author(&self, id: Option<i64>, author: &Author) -> AppResult<()> {
        ensure(AUTHOR, self.authors.is_valid_author_id(id), "Invalid author id")?;
        self.check_create_author(author)
    }

    // ------------------------------------------------------------------
    // Book
    // ------------------------------------------------------------------

    pub fn check_create_book(&self, book: &Book) -> AppResult<()> {
        record(BOOK, validate_book(book))?;
        ensure(
            BOOK,
            self.books.is_valid_author_id(book.author_id),
            "Invalid author id",
        )?;
        record(BOOK, validate_copy_counts(book))?;
        admitted(BOOK, book.id);
        Ok(())
    }

    pub fn check_update_book(&self, id: Option<i64>, book: &Book) -> AppResult<()> {
        ensure(BOOK, self.books.is_valid_book_id(id), "Invalid book id")?;
        self.check_create_book(book)
    }

    // ------------------------------------------------------------------
    // Book copy
    // ------------------------------------------------------------------

    pub fn check_create_book_copy(&self, copy: &BookCopy) -> AppResult<()> {
        record(BOOK_COPY, validate_book_copy(copy))?;
        ensure(
            BOOK_COPY,
            self.copies.is_valid_book_id(copy.book_id),
            "Invalid book id",
        )?;
        ensure(
            BOOK_COPY,
            self.copies.is_valid_library_id(copy.library_id),
            "Invalid library id",
        )?;
        admitted(BOOK_COPY, copy.id);
        Ok(())
    }

    pub fn check_update_book_copy(&self, id: Option<i64>, copy: &BookCopy) -> AppResult<()> {
        ensure(
            BOOK_COPY,
            self.copies.is_valid_book_copy_id(id),
            "Invalid book copy id",
        )?;
        self.check_create_book_copy(copy)
    }

    // ------------------------------------------------------------------
    // Loan
    // ------------------------------------------------------------------

    pub fn check_create_loan(&self, loan: &Loan) -> AppResult<()> {
        record(LOAN, validate_loan(loan))?;
        ensure(LOAN, self.loans.is_valid_user_id(loan.user_id), "Invalid user id")?;
        ensure(
            LOAN,
            self.loans.is_valid_book_copy_id(loan.book_copy_id),
            "Invalid book copy id",
        )?;
        admitted(LOAN, loan.id);
        Ok(())
    }

    pub fn check_update_loan(&self, id: Option<i64>, loan: &Loan) -> AppResult<()> {
        ensure(LOAN, self.loans.is_valid_loan_id(id), "Invalid loan id")?;
        self.check_create_loan(loan)
    }

    /// Borrowing eligibility plus the policy's loan limit.
    /// `active_loans` is the member's current count of unreturned loans.
    pub fn check_borrowing(&self, user: &User, active_loans: usize) -> AppResult<()> {
        ensure(
            LOAN,
            self.users.can_user_borrow_books(user.id),
            "User is not eligible to borrow",
        )?;
        if !user.has_loan_capacity(active_loans, &self.policy) {
            return Err(reject(
                LOAN,
                format!(
                    "User already holds {} of {} allowed loans",
                    active_loans, self.policy.max_active_loans
                ),
            ));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Fine
    // ------------------------------------------------------------------

    pub fn check_create_fine(&self, fine: &Fine) -> AppResult<()> {
        record(FINE, validate_fine(fine))?;
        ensure(FINE, self.fines.is_valid_loan_id(fine.loan_id), "Invalid loan id")?;
        ensure(FINE, self.fines.is_valid_user_id(fine.user_id), "Invalid user id")?;
        admitted(FINE, fine.id);
        Ok(())
    }

    pub fn check_update_fine(&self, id: Option<i64>, fine: &Fine) -> AppResult<()> {
        ensure(FINE, self.fines.is_valid_fine_id(id), "Invalid fine id")?;
        self.check_create_fine(fine)
    }

    // ------------------------------------------------------------------
    // Reservation
    // ------------------------------------------------------------------

    pub fn check_create_reservation(&self, reservation: &Reservation) -> AppResult<()> {
        record(RESERVATION, validate_reservation(reservation))?;
        ensure(
            RESERVATION,
            self.reservations.is_valid_user_id(reservation.user_id),
            "Invalid user id",
        )?;
        ensure(
            RESERVATION,
            self.reservations.is_valid_book_id(reservation.book_id),
            "Invalid book id",
        )?;
        admitted(RESERVATION, reservation.id);
        Ok(())
    }

    pub fn check_update_reservation(
        &self,
        id: Option<i64>,
        reservation: &Reservation,
    ) -> AppResult<()> {
        ensure(
            RESERVATION,
            self.reservations.is_valid_reservation_id(id),
            "Invalid reservation id",
        )?;
        self.check_create_reservation(reservation)
    }

    // ------------------------------------------------------------------
    // Staff
    // ------------------------------------------------------------------

    pub fn check_create_staff(&self, staff: &Staff) -> AppResult<()> {
        record(STAFF, validate_staff(staff))?;
        ensure(
            STAFF,
            self.staff.is_valid_email(staff.email.as_deref()),
            "Invalid email",
        )?;
        ensure(
            STAFF,
            self.staff.is_valid_library_id(staff.library_id),
            "Invalid library id",
        )?;
        if staff.department.is_some() {
            ensure(
                STAFF,
                self.staff.is_valid_department(staff.department.as_deref()),
                "Department cannot be blank",
            )?;
        }
        if staff.position.is_some() {
            ensure(
                STAFF,
                self.staff.is_valid_position(staff.position.as_deref()),
                "Position cannot be blank",
            )?;
        }
        admitted(STAFF, staff.id);
        Ok(())
    }

    pub fn check_update_staff(&self, id: Option<i64>, staff: &Staff) -> AppResult<()> {
        ensure(STAFF, self.staff.is_valid_staff_id(id), "Invalid staff id")?;
        self.check_create_staff(staff)
    }

    // ------------------------------------------------------------------
    // User
    // ------------------------------------------------------------------

    pub fn check_create_user(&self, user: &User) -> AppResult<()> {
        record(USER, validate_user(user))?;
        ensure(
            USER,
            self.users.is_valid_email(user.email.as_deref()),
            "Invalid email",
        )?;
        admitted(USER, user.id);
        Ok(())
    }

    pub fn check_update_user(&self, id: Option<i64>, user: &User) -> AppResult<()> {
        ensure(USER, self.users.is_valid_user_id(id), "Invalid user id")?;
        self.check_create_user(user)
    }
}

fn reject(entity: &'static str, reason: impl Into<String>) -> AppError {
    let err = AppError::rejected(entity, reason);
    warn!("{}", err);
    err
}

fn ensure(entity: &'static str, ok: bool, reason: &str) -> AppResult<()> {
    if ok {
        Ok(())
    } else {
        Err(reject(entity, reason))
    }
}

fn record(entity: &'static str, result: DomainResult<()>) -> AppResult<()> {
    result.map_err(|e| reject(entity, e.to_string()))
}

fn admitted(entity: &'static str, id: Option<i64>) {
    match id {
        Some(id) => debug!("{} {} admitted", entity, id),
        None => debug!("New {} admitted", entity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn service() -> AdmissionService {
        AdmissionService::new(LibraryPolicy::default())
    }

    fn assert_rejected(result: AppResult<()>, expected_entity: &str, fragment: &str) {
        match result {
            Err(AppError::Rejected { entity, reason }) => {
                assert_eq!(entity, expected_entity);
                assert!(
                    reason.contains(fragment),
                    "reason {:?} does not mention {:?}",
                    reason,
                    fragment
                );
            }
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdmissionService>();
    }

    #[test]
    fn test_concurrent_checks_agree() {
        let s = service();
        let good = Book::new("Persuasion", "9780141439686", Some(2));
        let bad = Book::new("  ", "9780141439686", Some(2));

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert!(s.check_create_book(&good).is_ok());
                        assert!(s.check_create_book(&bad).is_err());
                    }
                });
            }
        });
    }

    #[test]
    fn test_author() {
        let s = service();
        assert!(s.check_create_author(&Author::new("Jane", "Austen")).is_ok());
        assert_rejected(
            s.check_create_author(&Author::new(" ", "Austen")),
            "Author",
            "first name",
        );
        assert_rejected(
            s.check_update_author(Some(0), &Author::new("Jane", "Austen")),
            "Author",
            "author id",
        );
        assert!(s
            .check_update_author(Some(4), &Author::new("Jane", "Austen"))
            .is_ok());
    }

    #[test]
    fn test_book_requires_author_and_consistent_counts() {
        let s = service();
        let book = Book::new("Emma", "9780141439587", Some(1));
        assert!(s.check_create_book(&book).is_ok());

        let orphan = Book::new("Emma", "9780141439587", None);
        assert_rejected(s.check_create_book(&orphan), "Book", "author id");

        let overfull = book.clone().with_copies(1, 2);
        assert_rejected(s.check_create_book(&overfull), "Book", "inconsistent");

        assert_rejected(s.check_update_book(None, &book), "Book", "book id");
    }

    #[test]
    fn test_book_copy_references() {
        let s = service();
        assert!(s.check_create_book_copy(&BookCopy::new(1, 2, "BC-9")).is_ok());

        let missing = BookCopy {
            library_id: None,
            ..BookCopy::new(1, 2, "BC-9")
        };
        assert_rejected(s.check_create_book_copy(&missing), "BookCopy", "library");

        // present but not a usable identifier
        let zero = BookCopy::new(0, 2, "BC-9");
        assert_rejected(s.check_create_book_copy(&zero), "BookCopy", "book id");
    }

    #[test]
    fn test_loan_references() {
        let s = service();
        let loan = Loan::new(1, 2, Utc::now(), due());
        assert!(s.check_create_loan(&loan).is_ok());
        assert!(s.check_update_loan(Some(8), &loan).is_ok());

        let bad = Loan::new(-1, 2, Utc::now(), due());
        assert_rejected(s.check_create_loan(&bad), "Loan", "user id");
        assert_rejected(s.check_update_loan(Some(0), &loan), "Loan", "loan id");
    }

    #[test]
    fn test_fine_references() {
        let s = service();
        let fine = Fine::new(4, 9, 250, "Overdue return", due());
        assert!(s.check_create_fine(&fine).is_ok());
        assert!(s.check_update_fine(Some(2), &fine).is_ok());

        let mut unpaid = fine.clone();
        unpaid.amount_cents = 0;
        assert_rejected(s.check_create_fine(&unpaid), "Fine", "positive");

        let bad = Fine::new(0, 9, 250, "Overdue return", due());
        assert_rejected(s.check_create_fine(&bad), "Fine", "loan id");
        assert_rejected(s.check_update_fine(None, &fine), "Fine", "fine id");
    }

    #[test]
    fn test_borrowing_limit() {
        let s = service();
        let user = User::new("Alan", "Turing", "alan@example.com").with_id(3);
        assert!(s.check_borrowing(&user, 4).is_ok());
        assert_rejected(s.check_borrowing(&user, 5), "Loan", "5 of 5");

        let unsaved = User::new("Alan", "Turing", "alan@example.com");
        assert_rejected(s.check_borrowing(&unsaved, 0), "Loan", "not eligible");
    }

    #[test]
    fn test_reservation_references() {
        let s = service();
        let reservation = Reservation::new(1, 2, Utc::now(), due());
        assert!(s.check_create_reservation(&reservation).is_ok());

        let mut missing = reservation.clone();
        missing.book_id = None;
        assert_rejected(s.check_create_reservation(&missing), "Reservation", "book");
        assert_rejected(
            s.check_update_reservation(Some(-2), &reservation),
            "Reservation",
            "reservation id",
        );
    }

    #[test]
    fn test_staff_applies_dedicated_field_checks() {
        let s = service();
        let staff = Staff::new("Ada", "Byron", "ada@library.org", "Librarian", Some(1));
        assert!(s.check_create_staff(&staff).is_ok());

        // passes the record rule, fails the email rule
        let mut blank_email = staff.clone();
        blank_email.email = Some("   ".to_string());
        assert!(StaffValidator.is_valid_staff(Some(&blank_email)));
        assert_rejected(s.check_create_staff(&blank_email), "Staff", "email");

        let no_library = Staff::new("Ada", "Byron", "ada@library.org", "Librarian", None);
        assert_rejected(s.check_create_staff(&no_library), "Staff", "library id");

        let blank_department = staff.clone().with_department(" ");
        assert_rejected(s.check_create_staff(&blank_department), "Staff", "Department");

        let mut no_position = staff.clone();
        no_position.position = None;
        assert!(s.check_create_staff(&no_position).is_ok());

        assert_rejected(s.check_update_staff(None, &staff), "Staff", "staff id");
    }

    #[test]
    fn test_user_email() {
        let s = service();
        assert!(s
            .check_create_user(&User::new("Alan", "Turing", "alan@example.com"))
            .is_ok());
        assert_rejected(
            s.check_create_user(&User::new("Alan", "Turing", "alan.example.com")),
            "User",
            "email",
        );
        assert_rejected(
            s.check_update_user(Some(0), &User::new("Alan", "Turing", "a@b")),
            "User",
            "user id",
        );
    }
}
