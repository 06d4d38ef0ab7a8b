//! Minimal example: run a Lua chunk and read a global back.
//!
//! Run with:
//!   cargo run --example hello

use luahost::Runtime;

fn main() {
    let rt = Runtime::new().expect("failed to create Lua runtime");

    rt.exec("a = 1 + 2").unwrap();
    println!("1 + 2 = {}", rt.get_global::<i64>("a").unwrap());

    rt.exec("greeting = 'Hello' .. ' from ' .. 'Lua!'").unwrap();
    println!("{}", rt.get_global::<String>("greeting").unwrap());
}
