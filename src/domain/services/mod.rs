//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod outcome_classifier;
