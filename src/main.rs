use std::io;

use luahost::Runtime;
use tracing::Level;

fn main() -> Result<(), luahost::Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let rt = Runtime::new()?;
    rt.exec_file("test1.lua")?;

    let a: String = rt.get_global("a")?;
    print!("{a}");

    Ok(())
}
