/// Formats the chain of an error, one cause per line
pub fn error_chain(err: &anyhow::Error) -> String {
    err.chain()
        .enumerate()
        .fold(String::new(), |mut a, (i, err)| {
            a.extend(format!("\n[{}] --> ", i).drain(..));
            a.extend(err.to_string().drain(..));
            a
        })
}

/// Logs an error that is being absorbed instead of propagated
pub fn inspect_err<F, D>(err: &anyhow::Error, kind: F)
where
    F: Fn() -> D,
    D: std::fmt::Display,
{
    log::warn!(
        "falling back to demo data for {} because: {}",
        kind(),
        error_chain(err)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context as _;

    #[test]
    fn chain() {
        let err = Err::<(), _>(anyhow::anyhow!("connection refused"))
            .context("cannot get url 'http://localhost'")
            .unwrap_err();

        assert_eq!(
            error_chain(&err),
            "\n[0] --> cannot get url 'http://localhost'\n[1] --> connection refused"
        );
    }
}
