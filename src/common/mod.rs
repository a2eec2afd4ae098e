pub mod response;

pub use response::Envelope;
