//! The HelloWorld object: one class, two call paths.

use std::any::Any;
use std::io::{self, Write};
use std::sync::Arc;

use incom::{
    iid, ComError, ComObject, ComRef, DispId, Dispatch, Guid, MemberTable, RefCount, Result,
    Unknown, Variant,
};

use crate::IID_IHELLO_WORLD;

/// Strongly-typed greeting interface.
pub trait IHelloWorld: Dispatch {
    /// Write the fixed greeting to standard output.
    fn say_hello(&self) -> Result<()>;

    /// Return a freshly allocated copy of the fixed greeting.
    fn say_hello_str(&self) -> Result<String>;

    /// Return a freshly allocated greeting addressed to `name`.
    fn say_hello_to(&self, name: &str) -> Result<String>;
}

/// Dispatch id of `SayHello`.
pub const DISPID_SAY_HELLO: DispId = DispId(1);
/// Dispatch id of `SayHelloStr`.
pub const DISPID_SAY_HELLO_STR: DispId = DispId(2);
/// Dispatch id of `SayHelloTo`.
pub const DISPID_SAY_HELLO_TO: DispId = DispId(3);

const GREETING: &str = "Hello, World!\n";

static MEMBERS: MemberTable = MemberTable::new(&[
    ("SayHello", DISPID_SAY_HELLO),
    ("SayHelloStr", DISPID_SAY_HELLO_STR),
    ("SayHelloTo", DISPID_SAY_HELLO_TO),
]);

const HELLO_IIDS: &[Guid] = &[iid::UNKNOWN, iid::DISPATCH, IID_IHELLO_WORLD];

/// The demo object. Carries no state beyond its reference count, so
/// concurrent calls need no mutual exclusion.
pub struct HelloWorld {
    refs: RefCount,
}

impl HelloWorld {
    /// Construct with the creator's single reference.
    pub fn create() -> ComRef<HelloWorld> {
        ComRef::new(HelloWorld {
            refs: RefCount::new(),
        })
    }
}

impl Unknown for HelloWorld {
    fn iids(&self) -> &[Guid] {
        HELLO_IIDS
    }

    fn ref_count(&self) -> &RefCount {
        &self.refs
    }
}

impl ComObject for HelloWorld {
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn into_dispatch(self: Arc<Self>) -> Option<Arc<dyn Dispatch>> {
        Some(self)
    }
}

impl Dispatch for HelloWorld {
    fn ids_of_names(&self, name: &str) -> Result<DispId> {
        MEMBERS.dispid(name)
    }

    fn invoke(&self, dispid: DispId, args: &[Variant]) -> Result<Variant> {
        match dispid {
            DISPID_SAY_HELLO => {
                self.say_hello()?;
                Ok(Variant::Empty)
            }
            DISPID_SAY_HELLO_STR => Ok(Variant::Bstr(self.say_hello_str()?)),
            DISPID_SAY_HELLO_TO => match args {
                [Variant::Bstr(name)] => Ok(Variant::Bstr(self.say_hello_to(name)?)),
                _ => Err(ComError::TypeMismatch),
            },
            other => Err(ComError::MemberNotFound(other)),
        }
    }
}

impl IHelloWorld for HelloWorld {
    fn say_hello(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(GREETING.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| ComError::Unexpected(e.to_string()))
    }

    fn say_hello_str(&self) -> Result<String> {
        Ok(GREETING.to_string())
    }

    fn say_hello_to(&self, name: &str) -> Result<String> {
        Ok(format!("Hello, {}!\n", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CLSID_HELLO_WORLD;

    #[test]
    fn test_names_resolve_case_insensitively() {
        let hello = HelloWorld::create();
        assert_eq!(hello.ids_of_names("SayHello").unwrap(), DISPID_SAY_HELLO);
        assert_eq!(hello.ids_of_names("sayhelloto").unwrap(), DISPID_SAY_HELLO_TO);
        assert_eq!(
            hello.ids_of_names("SAYHELLOSTR").unwrap(),
            DISPID_SAY_HELLO_STR
        );
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let hello = HelloWorld::create();
        assert_eq!(
            hello.ids_of_names("Bogus"),
            Err(ComError::UnknownName("Bogus".to_string()))
        );
    }

    #[test]
    fn test_invoke_returns_fixed_greeting() {
        let hello = HelloWorld::create();
        let result = hello.invoke(DISPID_SAY_HELLO_STR, &[]).unwrap();
        assert_eq!(result.as_str(), Some("Hello, World!\n"));
    }

    #[test]
    fn test_invoke_greets_by_name() {
        let hello = HelloWorld::create();
        let args = [Variant::from("World")];
        let result = hello.invoke(DISPID_SAY_HELLO_TO, &args).unwrap();
        assert_eq!(result.as_str(), Some("Hello, World!\n"));
    }

    #[test]
    fn test_invoke_checks_arity_and_type() {
        let hello = HelloWorld::create();
        assert_eq!(
            hello.invoke(DISPID_SAY_HELLO_TO, &[]),
            Err(ComError::TypeMismatch)
        );
        assert_eq!(
            hello.invoke(DISPID_SAY_HELLO_TO, &[Variant::I4(123)]),
            Err(ComError::TypeMismatch)
        );

        let two = [Variant::from("a"), Variant::from("b")];
        assert_eq!(hello.invoke(DISPID_SAY_HELLO_TO, &two), Err(ComError::TypeMismatch));
    }

    #[test]
    fn test_invoke_outside_member_table() {
        let hello = HelloWorld::create();
        assert_eq!(
            hello.invoke(DispId(99), &[]),
            Err(ComError::MemberNotFound(DispId(99)))
        );
    }

    #[test]
    fn test_no_type_information() {
        let hello = HelloWorld::create();
        assert_eq!(hello.type_info_count(), 0);
        assert!(matches!(hello.type_info(0), Err(ComError::BadIndex(0))));
        assert!(matches!(hello.type_info(7), Err(ComError::BadIndex(7))));
    }

    #[test]
    fn test_supported_interfaces_alias_one_instance() {
        let hello = HelloWorld::create();
        for requested in [iid::UNKNOWN, iid::DISPATCH, IID_IHELLO_WORLD] {
            let before = hello.refs();
            let view = hello.query_interface(&requested).unwrap();
            assert_eq!(view.refs(), before + 1);
            view.release();
        }
        assert!(matches!(
            hello.query_interface(&CLSID_HELLO_WORLD),
            Err(ComError::NoSuchInterface(_))
        ));
        assert_eq!(hello.refs(), 1);
    }
}
