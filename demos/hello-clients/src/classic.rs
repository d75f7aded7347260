//! Early-bound HelloWorld client
//!
//! Resolves the ProgID, creates an instance through the activation
//! resolver, and calls the strongly-typed interface: the shortest path
//! from a class name to a greeting.
//!
//! Run with: cargo run --bin hello-client -- --name "John Doe"

use clap::Parser;
use tracing::info;

use hello_clients::{init_tracing, install};
use incom_hello::{HelloWorld, IHelloWorld, IID_IHELLO_WORLD, PROG_ID};

#[derive(Parser)]
#[command(name = "hello-client")]
#[command(about = "Early-bound HelloWorld client")]
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
    info!(%clsid, "resolved {}", PROG_ID);

    let object = runtime.create_instance(&clsid, &IID_IHELLO_WORLD)?;
    let hello = match object.cast::<HelloWorld>() {
        Ok(hello) => hello,
        Err(_) => return Err("object is not a HelloWorld instance".into()),
    };

    match hello.say_hello_to(&args.name) {
        Ok(greeting) => print!("{}", greeting),
        Err(e) => eprintln!("SayHelloTo failed: {} (0x{:08X})", e, e.hresult()),
    }

    match hello.say_hello_str() {
        Ok(greeting) => print!("{}", greeting),
        Err(e) => eprintln!("SayHelloStr failed: {} (0x{:08X})", e, e.hresult()),
    }

    hello.say_hello()?;

    Ok(())
}
