pub mod pacing;
pub mod fetcher;
pub mod dispatcher;
pub mod digest;

pub use pacing::{RequestPacer, RetryPolicy};
pub use fetcher::{FetchError, QuoteFetcher, DEFAULT_REQUEST_INTERVAL};
pub use dispatcher::{DispatchError, Dispatcher, MessagingCredentials};
pub use digest::{DigestError, DigestJob, DigestReport};
