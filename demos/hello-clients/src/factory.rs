//! HelloWorld client driving the class factory directly
//!
//! Mirrors the explicit activation sequence: get the class object, lock
//! the server, create an instance, call it, unlock, release, and finally
//! ask whether the module could be unloaded.
//!
//! Run with: cargo run --bin hello-client-factory

use clap::Parser;
use tracing::info;

use hello_clients::{init_tracing, install};
use incom::{hresult, iid, ClassFactory, Guid};
use incom_hello::{HelloWorld, IHelloWorld, IID_IHELLO_WORLD, PROG_ID};

#[derive(Parser)]
#[command(name = "hello-client-factory")]
#[command(about = "HelloWorld client driving the class factory directly")]
struct Args {
    /// Name to greet.
    #[arg(short, long, default_value = "John Doe")]
    name: String,

    /// Class identifier to activate instead of the registered one.
    #[arg(long, value_parser = parse_guid)]
    clsid: Option<Guid>,

    /// Suppress informational output.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_guid(s: &str) -> Result<Guid, String> {
    Guid::parse(s).ok_or_else(|| format!("invalid identifier: {}", s))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.quiet);

    let runtime = install();

    let clsid = match args.clsid {
        Some(clsid) => clsid,
        None => runtime.clsid_from_progid(PROG_ID)?,
    };

    let factory = match runtime.get_class_object(&clsid, &iid::CLASS_FACTORY) {
        Ok(factory) => factory,
        Err(e) => {
            eprintln!("failed to get class factory: {} (0x{:08X})", e, e.hresult());
            return Ok(());
        }
    };

    factory.lock_server(true)?;

    // Aggregation is outside the contract; the factory refuses it and
    // stays usable.
    let outer = HelloWorld::create();
    if let Err(e) = factory.create_instance(Some(&*outer), &IID_IHELLO_WORLD) {
        info!("aggregation refused: {} (0x{:08X})", e, e.hresult());
    }
    drop(outer);

    let object = factory.create_instance(None, &IID_IHELLO_WORLD)?;
    let hello = match object.cast::<HelloWorld>() {
        Ok(hello) => hello,
        Err(_) => return Err("object is not a HelloWorld instance".into()),
    };

    match hello.say_hello_to(&args.name) {
        Ok(greeting) => print!("{}", greeting),
        Err(e) => eprintln!("SayHelloTo failed: {} (0x{:08X})", e, e.hresult()),
    }

    hello.say_hello()?;

    factory.lock_server(false)?;

    let remaining = hello.release();
    info!(remaining, "instance released");
    factory.release();

    // Unload query: S_OK when the module is idle, S_FALSE while
    // activations are outstanding.
    let code = if runtime.try_unload(&clsid) {
        hresult::S_OK
    } else {
        hresult::S_FALSE
    };
    info!("unload query returned 0x{:08X}", code);

    Ok(())
}
