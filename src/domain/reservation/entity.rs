use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::rules::add_days;
use crate::domain::{DomainError, DomainResult};

/// A user's hold on a catalogued book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Option<i64>,

    /// Required reference to the user holding the reservation
    pub user_id: Option<i64>,

    /// Required reference to the reserved book
    pub book_id: Option<i64>,

    pub reservation_date: DateTime<Utc>,

    /// Last day the hold is honoured
    pub expiry_date: NaiveDate,

    #[serde(default)]
    pub status: ReservationStatus,

    /// 1-based place in the book's waiting line
    pub queue_position: Option<u32>,

    pub notification_sent_date: Option<DateTime<Utc>>,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Active,
    Pending,
    Fulfilled,
    Cancelled,
    Expired,
}

impl Reservation {
    pub fn new(
        user_id: i64,
        book_id: i64,
        reservation_date: DateTime<Utc>,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
            book_id: Some(book_id),
            reservation_date,
            expiry_date,
            status: ReservationStatus::Active,
            queue_position: None,
            notification_sent_date: None,
            notes: None,
        }
    }

    pub fn with_queue_position(mut self, position: u32) -> Self {
        self.queue_position = Some(position);
        self
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }

    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.status == ReservationStatus::Active && !self.is_expired(today)
    }

    /// The copy is ready for pickup and the user has been told
    pub fn fulfill(&mut self, notified_at: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_open("fulfill")?;
        self.status = ReservationStatus::Fulfilled;
        self.notification_sent_date = Some(notified_at);
        Ok(())
    }

    pub fn cancel(&mut self, reason: impl Into<String>) -> DomainResult<()> {
        self.ensure_open("cancel")?;
        self.status = ReservationStatus::Cancelled;
        self.notes = Some(reason.into());
        Ok(())
    }

    pub fn expire(&mut self) {
        self.status = ReservationStatus::Expired;
    }

    /// Only active holds can be extended, and only forward; returns
    /// whether anything changed
    pub fn extend_expiry(&mut self, additional_days: i64, today: NaiveDate) -> bool {
        if additional_days <= 0 || !self.is_active(today) {
            return false;
        }
        match add_days(self.expiry_date, additional_days) {
            Some(expiry) => {
                self.expiry_date = expiry;
                true
            }
            None => false,
        }
    }

    /// Negative once the hold has lapsed
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    pub fn estimated_wait_days(&self, average_loan_days: u32) -> u32 {
        match self.queue_position {
            Some(position) if position > 1 => (position - 1).saturating_mul(average_loan_days),
            _ => 0,
        }
    }

    fn ensure_open(&self, action: &str) -> DomainResult<()> {
        match self.status {
            ReservationStatus::Active | ReservationStatus::Pending => Ok(()),
            other => Err(DomainError::InvalidStateTransition(format!(
                "Cannot {} a reservation in state {}",
                action, other
            ))),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationStatus::Active => write!(f, "ACTIVE"),
            ReservationStatus::Pending => write!(f, "PENDING"),
            ReservationStatus::Fulfilled => write!(f, "FULFILLED"),
            ReservationStatus::Cancelled => write!(f, "CANCELLED"),
            ReservationStatus::Expired => write!(f, "EXPIRED"),
        }
    }
}
