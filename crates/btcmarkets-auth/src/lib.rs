//! Request signing for the BTC Markets REST API v3
//!
//! Every v3 request carries three authentication headers: the API key, a
//! millisecond timestamp, and an HMAC-SHA512 signature over
//! `method + path + timestamp + body` keyed with the base64-decoded secret.
//!
//! # Example
//!
//! ```no_run
//! use btcmarkets_auth::{Credentials, RequestSigner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load credentials from environment
//! let creds = Credentials::from_env()?;
//!
//! // One signer per request; it reads the clock once
//! let signer = RequestSigner::new(&creds, "GET", "/v3/accounts/me/balances");
//! for (name, value) in signer.sign(None).iter() {
//!     println!("{}: {}", name, value);
//! }
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod headers;

pub use credentials::{Credentials, RequestSigner, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use headers::{SignedHeaders, HEADER_API_KEY, HEADER_SIGNATURE, HEADER_TIMESTAMP};
