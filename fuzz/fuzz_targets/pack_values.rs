#![no_main]

use libfuzzer_sys::fuzz_target;
use telepath_fuzz::FuzzCase;

fuzz_target!(|case: FuzzCase| {
    // Any error is fine; a panic or stack overflow is a bug
    let _ = case.run();
});
