//! In-process component object runtime
//!
//! This crate provides the minimum machinery needed to implement and
//! consume an in-process COM-style component: reference-counted objects
//! answering capability queries, a late-bound automation path next to the
//! strongly-typed one, class factories, and a small activation resolver.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Activation (this crate)                 │
//! │  Runtime            │  ClassRegistry   │  InprocServer      │
//! │  - CLSID to server  │  - ProgID/CLSID  │  - class objects   │
//! │  - create_instance  │  - records       │  - unload query    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     Object model (this crate)               │
//! │  Unknown / Dispatch / ClassFactory traits                   │
//! │  ComRef<T> counted handles  │  MemberTable  │  Variant      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key concepts
//!
//! - **Capability query**: a typed handle to an object, conditioned on the
//!   object supporting the requested interface identifier
//! - **Counted handle**: [`ComRef`] holds exactly one reference; the
//!   decrement that reaches zero destroys the object
//! - **Late binding**: member names resolve to dispatch ids, which are
//!   invoked with [`Variant`] arguments
//! - **Activation**: CLSID plus requested IID resolved to a live handle
//!   through a registered in-process server
//!
//! # Modules
//!
//! - [`types`]: identifiers, status codes, variant values
//! - [`object`]: the reference-counted object model and dispatch protocol
//! - [`activation`]: registration records and the activation resolver

pub mod activation;
pub mod object;
pub mod types;

pub use activation::{ClassRegistration, ClassRegistry, InprocServer, Runtime, ThreadingModel};
pub use object::{
    ClassFactory, ComObject, ComRef, DispId, Dispatch, MemberTable, RefCount, TypeInfo, Unknown,
};
pub use types::{hresult, iid, ComError, Guid, Result, Variant};
