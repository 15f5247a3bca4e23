pub mod checker;
pub mod dialer;
pub mod mock;
pub mod types;
pub mod url;
pub mod web_client;

// Re-export commonly used items
pub use checker::{can_connect, check_host, is_reachable_status};
pub use dialer::{Connection, Dialer, TcpDialer};
pub use mock::{MockDialer, MockResponse, MockWebClient};
pub use types::*;
pub use self::url::is_valid_url;
pub use web_client::{IsahcWebClient, WebClient};
