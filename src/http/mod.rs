pub mod request;
pub mod response;

pub use request::HttpRequest;
pub use response::{
    bad_request, forbidden, no_content, ok, server_error, unauthorized, HttpResponse,
    ResponseBody,
};
