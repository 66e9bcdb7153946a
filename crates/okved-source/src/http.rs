use crate::source::TreeSource;
use crate::{Result, SourceError};

#[cfg(feature = "http-source")]
mod imp {
    use super::{Result, SourceError, TreeSource};
    use crate::tree::parse_tree;
    use okved_core::OkvedNode;
    use reqwest::blocking::Client;
    use std::time::Duration;
    use tracing::debug;
    use url::Url;

    #[derive(Debug, Clone)]
    pub struct HttpSource {
        url: String,
        user_agent: String,
        timeout: Duration,
        connect_timeout: Duration,
    }

    impl HttpSource {
        pub fn new(
            url: String,
            user_agent: String,
            timeout: Duration,
            connect_timeout: Duration,
        ) -> Self {
            Self {
                url,
                user_agent,
                timeout,
                connect_timeout,
            }
        }
    }

    impl TreeSource for HttpSource {
        fn source_name(&self) -> &'static str {
            "http"
        }

        fn fetch_tree(&self) -> Result<Vec<OkvedNode>> {
            fetch_tree(
                &self.url,
                &self.user_agent,
                self.timeout,
                self.connect_timeout,
            )
        }
    }

    pub fn fetch_tree(
        tree_url: &str,
        user_agent: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Vec<OkvedNode>> {
        let url = Url::parse(tree_url)?;
        if url.scheme() != "https" {
            return Err(SourceError::Parse("okved url must use https".to_string()));
        }
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        debug!(url = %url, "downloading okved tree");
        let response = client
            .get(url)
            .header("Accept", "application/json")
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        parse_tree(&body)
    }

}

#[cfg(not(feature = "http-source"))]
mod imp {
    use super::{Result, SourceError, TreeSource};
    use okved_core::OkvedNode;
    use std::time::Duration;

    #[derive(Debug, Clone)]
    pub struct HttpSource {
        url: String,
        user_agent: String,
        timeout: Duration,
        connect_timeout: Duration,
    }

    impl HttpSource {
        pub fn new(
            url: String,
            user_agent: String,
            timeout: Duration,
            connect_timeout: Duration,
        ) -> Self {
            Self {
                url,
                user_agent,
                timeout,
                connect_timeout,
            }
        }
    }

    impl TreeSource for HttpSource {
        fn source_name(&self) -> &'static str {
            "http"
        }

        fn fetch_tree(&self) -> Result<Vec<OkvedNode>> {
            let _ = (
                &self.url,
                &self.user_agent,
                &self.timeout,
                &self.connect_timeout,
            );
            Err(SourceError::Unavailable(
                "downloading the okved tree requires the http-source feature".to_string(),
            ))
        }
    }

    pub fn fetch_tree(
        _tree_url: &str,
        _user_agent: &str,
        _timeout: Duration,
        _connect_timeout: Duration,
    ) -> Result<Vec<OkvedNode>> {
        Err(SourceError::Unavailable(
            "downloading the okved tree requires the http-source feature".to_string(),
        ))
    }
}

pub use imp::{fetch_tree, HttpSource};
