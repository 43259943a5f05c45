mod common;
mod labels;
