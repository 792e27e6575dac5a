// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod admission_service;

pub use admission_service::AdmissionService;
