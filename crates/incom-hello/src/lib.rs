//! HelloWorld in-process component
//!
//! The demo class behind the `HelloWorldLib.HelloWorld` ProgID: a
//! dispatchable object reachable both through its strongly-typed
//! interface and through the late-bound automation path, the class
//! factory that constructs it, and the activation surface its hosting
//! module exports.

pub mod factory;
pub mod hello_world;
pub mod module;

pub use factory::HelloWorldFactory;
pub use hello_world::{
    HelloWorld, IHelloWorld, DISPID_SAY_HELLO, DISPID_SAY_HELLO_STR, DISPID_SAY_HELLO_TO,
};
pub use module::HelloServer;

use incom::Guid;

/// IHelloWorld interface identifier.
pub const IID_IHELLO_WORLD: Guid = Guid::new(
    0xA851_A7FE,
    0x4903,
    0x48AF,
    [0xA6, 0x94, 0x51, 0xFE, 0xB7, 0x55, 0xEE, 0x5B],
);

/// HelloWorld class identifier.
pub const CLSID_HELLO_WORLD: Guid = Guid::new(
    0xDC0F_3891,
    0x93F3,
    0x42E9,
    [0xA1, 0x17, 0x72, 0x9B, 0x4F, 0x3C, 0x77, 0x5A],
);

/// HelloWorldLib type library identifier.
pub const LIBID_HELLO_WORLD_LIB: Guid = Guid::new(
    0x9EBD_D250,
    0x565C,
    0x4182,
    [0xB5, 0xE9, 0x70, 0xCF, 0x63, 0xA8, 0x96, 0xE1],
);

/// ProgID clients resolve to the class identifier.
pub const PROG_ID: &str = "HelloWorldLib.HelloWorld";
