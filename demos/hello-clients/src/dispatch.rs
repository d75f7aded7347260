//! Late-bound HelloWorld client
//!
//! Drives the object the way an automation host would: resolve member
//! names to dispatch ids, then invoke them with variant arguments.
//! Failed calls print their status code and the object keeps serving.
//!
//! Run with: cargo run --bin hello-client-dispatch

use clap::Parser;
use tracing::info;

use hello_clients::{init_tracing, install};
use incom::{iid, DispId, Dispatch, Variant};
use incom_hello::PROG_ID;

#[derive(Parser)]
#[command(name = "hello-client-dispatch")]
#[command(about = "Late-bound HelloWorld client (automation path)")]
struct Args {
    /// Name to greet.
    #[arg(short, long, default_value = "John Doe")]
    name: String,

    /// Suppress informational output.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.quiet);

    let runtime = install();

    let clsid = runtime.clsid_from_progid(PROG_ID)?;
    let object = runtime.create_instance(&clsid, &iid::DISPATCH)?;
    let dispatch = object.query_dispatch()?;
    drop(object);

    let id = dispatch.ids_of_names("SayHello")?;
    dispatch.invoke(id, &[])?;

    let id = dispatch.ids_of_names("SayHelloStr")?;
    if let Some(greeting) = dispatch.invoke(id, &[])?.as_str() {
        print!("{}", greeting);
    }

    let id = dispatch.ids_of_names("SayHelloTo")?;
    let result = dispatch.invoke(id, &[Variant::from(args.name.as_str())])?;
    if let Some(greeting) = result.as_str() {
        print!("{}", greeting);
    }

    // Failures surface a status and leave the object usable.
    if let Err(e) = dispatch.ids_of_names("SayGoodbye") {
        info!("name lookup failed: {} (0x{:08X})", e, e.hresult());
    }
    if let Err(e) = dispatch.invoke(DispId(99), &[]) {
        info!("invoke failed: {} (0x{:08X})", e, e.hresult());
    }
    if let Err(e) = dispatch.invoke(id, &[Variant::I4(42)]) {
        info!("invoke failed: {} (0x{:08X})", e, e.hresult());
    }

    let again = dispatch.invoke(id, &[Variant::from("again, World")])?;
    if let Some(greeting) = again.as_str() {
        print!("{}", greeting);
    }

    Ok(())
}
