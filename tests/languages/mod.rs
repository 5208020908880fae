//! Scenarios for the bundled grammars.

mod tests_brainfuck;
mod tests_clike;
mod tests_css;
mod tests_go;
mod tests_java;
mod tests_json;
