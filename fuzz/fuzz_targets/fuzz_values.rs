#![no_main]
use libfuzzer_sys::fuzz_target;
use tagfilter::{is_color_token, neutralize_script, validate_color, INVALID_COLOR};

fuzz_target!(|data: &str| {
    let color = validate_color(data);
    assert!(color == data || color == INVALID_COLOR);
    assert!(is_color_token(&color) || color == INVALID_COLOR);

    let _ = neutralize_script(data);
});
