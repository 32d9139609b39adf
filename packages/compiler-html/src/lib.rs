mod compiler;
mod package;
mod responsive;
mod styles;

pub use compiler::{compile, compile_with, CompileOptions, BASE_STYLES, MOBILE_BREAKPOINT};
pub use package::EmailPackage;
pub use styles::{css_property, flatten_styles};
