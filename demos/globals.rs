//! Typed global access, failure handling, and runtime configuration.
//!
//! Run with:
//!   cargo run --example globals

use luahost::{Error, Runtime, RuntimeConfig, ValueKind};

fn main() {
    // -- Typed reads ---------------------------------------------------------
    let rt = Runtime::new().unwrap();
    rt.exec("count = 7; ratio = 0.25; name = 'luahost'; items = {}")
        .unwrap();

    let count: u8 = rt.get_global("count").unwrap();
    let ratio: f32 = rt.get_global("ratio").unwrap();
    let name: String = rt.get_global("name").unwrap();
    println!("count = {count}, ratio = {ratio}, name = {name}");

    // -- Conversion failures -------------------------------------------------
    match rt.get_global::<i32>("items") {
        Err(Error::Conversion { expected, got }) => {
            println!("items: expected {expected}, got {got}")
        }
        other => println!("items: unexpected result {other:?}"),
    }
    assert_eq!(rt.global_kind("missing").unwrap(), ValueKind::Nil);
    println!("missing: {}", rt.get_global::<String>("missing").unwrap_err());

    // -- Execution failures leave the runtime usable --------------------------
    let err = rt.exec("error('boom')").unwrap_err();
    println!("error('boom'): {err}");
    println!("count is still {}", rt.get_global::<i64>("count").unwrap());

    // -- Bare runtime without the standard libraries --------------------------
    let config = RuntimeConfig::builder().open_libs(false).build();
    let bare = Runtime::with_config(config).unwrap();
    println!(
        "print in a bare runtime is {}",
        bare.global_kind("print").unwrap().name()
    );
}
