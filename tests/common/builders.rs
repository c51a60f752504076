use cors_core::constants::{header, method};
use cors_core::{
    Cors, CorsOptions, CorsOutcome, Credentials, Exchange, HeaderList, HttpError, Origin,
};
use futures::executor::block_on;
use std::cell::Cell;

pub const BODY: &str = "downstream body";

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.options.origin = origin;
        self
    }

    pub fn credentials(mut self, credentials: impl Into<Credentials>) -> Self {
        self.options.credentials = credentials.into();
        self
    }

    pub fn allow_methods(mut self, methods: impl Into<HeaderList>) -> Self {
        self.options.allow_methods = Some(methods.into());
        self
    }

    pub fn without_allow_methods(mut self) -> Self {
        self.options.allow_methods = None;
        self
    }

    pub fn allow_headers(mut self, headers: impl Into<HeaderList>) -> Self {
        self.options.allow_headers = Some(headers.into());
        self
    }

    pub fn expose_headers(mut self, headers: impl Into<HeaderList>) -> Self {
        self.options.expose_headers = Some(headers.into());
        self
    }

    pub fn max_age(mut self, seconds: impl ToString) -> Self {
        self.options = self.options.with_max_age(seconds);
        self
    }

    pub fn keep_headers_on_error(mut self, enabled: bool) -> Self {
        self.options.keep_headers_on_error = enabled;
        self
    }

    pub fn secure_context(mut self, enabled: bool) -> Self {
        self.options.secure_context = enabled;
        self
    }

    pub fn private_network_access(mut self, enabled: bool) -> Self {
        self.options.private_network_access = enabled;
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options)
    }
}

/// What the continuation does when the engine invokes it.
#[derive(Clone)]
pub enum Downstream {
    Respond,
    Fail { status: u16, headers: Vec<(String, String)> },
}

impl Downstream {
    fn run(&self) -> Result<&'static str, HttpError> {
        match self {
            Downstream::Respond => Ok(BODY),
            Downstream::Fail { status, headers } => {
                let err = HttpError::new(*status, "downstream failure");
                Err(headers
                    .iter()
                    .fold(err, |err, (name, value)| err.with_header(name, value)))
            }
        }
    }
}

pub struct Handled {
    pub outcome: Result<CorsOutcome<&'static str>, HttpError>,
    pub exchange: Exchange,
    pub next_called: bool,
}

impl Handled {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.exchange.response_headers().get(name)
    }

    pub fn error(&self) -> &HttpError {
        match &self.outcome {
            Err(err) => err,
            Ok(outcome) => panic!("expected failure, got {:?}", outcome),
        }
    }
}

pub struct RequestBuilder {
    exchange: Exchange,
    downstream: Downstream,
}

impl RequestBuilder {
    pub fn new(method: &str) -> Self {
        Self {
            exchange: Exchange::new(method),
            downstream: Downstream::Respond,
        }
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_method(self, method: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
    }

    pub fn request_headers(self, headers: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers)
    }

    pub fn private_network(self) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK, "true")
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.exchange.insert_request_header(name, value);
        self
    }

    pub fn response_header(mut self, name: &str, value: &str) -> Self {
        self.exchange = self.exchange.with_response_header(name, value);
        self
    }

    pub fn failing(mut self, status: u16) -> Self {
        self.downstream = Downstream::Fail {
            status,
            headers: Vec::new(),
        };
        self
    }

    pub fn failing_with(mut self, status: u16, headers: &[(&str, &str)]) -> Self {
        self.downstream = Downstream::Fail {
            status,
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        };
        self
    }

    pub fn check(self, cors: &Cors) -> Handled {
        let RequestBuilder {
            mut exchange,
            downstream,
        } = self;
        let called = Cell::new(false);
        let outcome = block_on(cors.handle(&mut exchange, || {
            called.set(true);
            let result = downstream.run();
            async move { result }
        }));

        Handled {
            outcome,
            exchange,
            next_called: called.get(),
        }
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn options_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn preflight_request() -> RequestBuilder {
    options_request().request_method(method::PUT)
}
