use std::panic;

/// Routes panic messages through tracing so they end up next to the request logs.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            message
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic payload"
        };

        match info.location() {
            Some(location) => error!(
                file = location.file(),
                line = location.line(),
                "panicked: {}",
                message
            ),
            None => error!("panicked: {}", message),
        }
    }));
}
