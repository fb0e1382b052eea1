use env_logger::Env;
use std::io::Write;

pub fn init_logging() {
    match env_logger::Builder::from_env(Env::default())
        .format(|buf, record| {
            // Format the target to remove the crate prefix and replace "::" with "/"
            fn format_target(target: &str) -> String {
                target
                    .strip_prefix("tablesync::")
                    .unwrap_or(target)
                    .replace("::", "/")
            }

            writeln!(
                buf,
                "[{}] {} - {} {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                format_target(record.target()),
                record.args()
            )
        })
        .try_init()
    {
        Ok(_) => (),
        Err(_) => {
            // We already initialized the logger in tests
        }
    }
}
