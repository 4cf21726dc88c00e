#![no_main]

use jass::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The lexer never fails; feed whatever it produced to the parser
        let lexed = lexer::lex(s);
        let _ = parser::parse(&lexed.tokens);
    }
});
