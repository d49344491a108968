use multitool_policy::{is_permission_denied, to_friendly_message};

pub fn run(message: &str) {
    if is_permission_denied(message) {
        println!("🔒 Permission error detected");
    }
    println!("{}", to_friendly_message(message));
}
