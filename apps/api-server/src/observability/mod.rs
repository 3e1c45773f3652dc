//! Observability - request IDs layered over the tracing setup in `main`.

mod request_id;

pub use request_id::RequestIdMiddleware;
