pub mod diagnostics;
pub mod keywords;
pub mod parser;
pub mod printer;
pub mod scanner;
pub mod span;
