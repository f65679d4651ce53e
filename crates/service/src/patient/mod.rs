//! Patient module: domain entity, wire DTO, mapper, repository and service.
//!
//! The service talks to storage only through [`repository::PatientRepository`];
//! the mapper is the only place that converts between [`domain::Patient`] and
//! [`dto::PatientDto`].

pub mod domain;
pub mod dto;
pub mod errors;
pub mod mapper;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::Patient;
pub use dto::PatientDto;
pub use errors::PatientError;
pub use service::PatientService;
