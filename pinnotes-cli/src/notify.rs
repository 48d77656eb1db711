use std::fmt::Display;

pub fn success(message: impl Display) {
    println!("{message}");
}

pub fn warning(message: impl Display) {
    eprintln!("warning: {message}");
}

pub fn failure(message: impl Display) {
    eprintln!("error: {message}");
}
