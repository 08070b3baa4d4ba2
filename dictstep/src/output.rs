use dictstep_core::FieldValidity;

pub fn print_info(message: &str) {
    println!("[dictstep][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[dictstep][ERROR]: {message}");
}

fn flag(valid: bool) -> &'static str {
    if valid {
        "ok"
    } else {
        "invalid"
    }
}

pub fn print_step_check(id: u64, identifier: &str, validity: FieldValidity) {
    println!(
        "{id}\t{identifier:<24}\tidentifier: {}\tinput: {}",
        flag(validity.identifier),
        flag(validity.input)
    );
}
