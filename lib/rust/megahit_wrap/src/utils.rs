use itertools::Itertools;

/// Convert an io::error to a string and strip "(os error 4)" from the end.
fn io_error_to_string(err: &std::io::Error) -> String {
    let s = err.to_string();
    s.strip_suffix(&format!(" (os error {})", err.raw_os_error().unwrap_or(0)))
        .unwrap_or(&s)
        .to_string()
}

/// Format an error chain the way it is printed to the user.
pub fn format_error_chain(err: &anyhow::Error) -> String {
    let error_chain = err.chain().join("\n\tCaused by: ");
    match err.root_cause().downcast_ref::<std::io::Error>() {
        Some(io_err) if err.chain().len() <= 2 => {
            let io_err_str = io_error_to_string(io_err);
            if err.chain().len() == 1 {
                format!("ERROR: {io_err_str}")
            } else {
                format!("ERROR: {err}: {io_err_str}")
            }
        }
        _ => format!("ERROR: {error_chain}"),
    }
}

/// Print an error chain.
pub fn print_error_chain(err: &anyhow::Error) {
    eprintln!("{}", format_error_chain(err));
}

// Wrap the output of --help to 80 columns when the terminal size is unknown,
// which is the usual case inside a batch job.
pub fn set_env_columns() {
    if terminal_size::terminal_size().is_none() && std::env::var_os("COLUMNS").is_none() {
        std::env::set_var("COLUMNS", "80");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use pretty_assertions::assert_eq;

    fn not_found() -> std::io::Error {
        std::io::Error::from_raw_os_error(2)
    }

    #[test]
    fn test_io_error_suffix_stripped() {
        let err = anyhow::Error::from(not_found());
        assert_eq!(format_error_chain(&err), "ERROR: No such file or directory");

        let err = Err::<(), _>(not_found())
            .context("megahit-out")
            .unwrap_err();
        assert_eq!(
            format_error_chain(&err),
            "ERROR: megahit-out: No such file or directory"
        );
    }

    #[test]
    fn test_chain() {
        let err = anyhow::anyhow!("inner")
            .context("middle")
            .context("outer");
        assert_eq!(
            format_error_chain(&err),
            "ERROR: outer\n\tCaused by: middle\n\tCaused by: inner"
        );
    }
}
