use std::sync::{Mutex, MutexGuard};

static HELD: Mutex<Option<Vec<String>>> = Mutex::new(None);

fn held() -> MutexGuard<'static, Option<Vec<String>>> {
    // A panic while holding the lock leaves plain strings behind; keep them.
    HELD.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Start holding notices back so stdout output stays contiguous.
pub fn hold() {
    *held() = Some(Vec::new());
}

/// Stop holding and return the collected notices in arrival order.
pub fn release() -> Vec<String> {
    held().take().unwrap_or_default()
}

/// Stop holding and write every collected notice to stderr.
pub fn flush() {
    for notice in release() {
        eprintln!("{}", notice);
    }
}

/// Record a notice. Printed immediately unless notices are being held.
pub fn notice(msg: String) {
    let mut guard = held();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// `eprintln!`-style notice that respects [`hold`].
#[macro_export]
macro_rules! notice {
    ($($arg:tt)*) => {
        $crate::stderr_buffer::notice(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_and_release_preserves_order() {
        hold();
        notice("first".to_string());
        crate::notice!("second {}", 2);
        // Other tests may add notices concurrently; only check ours
        let ours: Vec<_> = release()
            .into_iter()
            .filter(|m| m == "first" || m == "second 2")
            .collect();
        assert_eq!(ours, vec!["first".to_string(), "second 2".to_string()]);
    }
}
