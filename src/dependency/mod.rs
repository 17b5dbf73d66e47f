mod clock;
mod download;
mod endpoint;
mod logging;
mod news_client;

pub use clock::today;
pub use download::offer_download;
pub use endpoint::{page_origin, NewsEndpoint};
pub use logging::{init_logging, ConsoleMakeWriter};
pub use news_client::{parse_news_body, FetchNewsClient, NewsSource};
