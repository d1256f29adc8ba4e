mod location;
mod route;

pub use location::Location;
pub use route::Route;
