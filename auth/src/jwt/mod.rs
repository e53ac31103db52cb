pub mod claims;
pub mod codec;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use codec::TokenCodec;
pub use errors::TokenError;
pub use handler::JwtHandler;
