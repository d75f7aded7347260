//! Counted handles to component objects.

use std::ops::Deref;
use std::sync::{Arc, Weak};

use crate::types::{iid, ComError, Guid, Result};

use super::dispatch::Dispatch;
use super::factory::ClassFactory;
use super::unknown::{ComObject, Unknown};

/// Owning handle to a component object, holding exactly one reference.
///
/// Cloning (or [`retain`](ComRef::retain)) takes a new reference;
/// dropping (or [`release`](ComRef::release)) gives one back. The
/// decrement that reaches zero destroys the object. Each counted
/// reference is backed by one `Arc` clone, so the count and the shared
/// allocation retire together; releasing a reference the handle does not
/// hold is unrepresentable through this API.
pub struct ComRef<T: Unknown + ?Sized> {
    // Some until the handle is consumed by release/into_arc.
    obj: Option<Arc<T>>,
}

impl<T: Unknown + ?Sized> ComRef<T> {
    /// Wrap an object, adopting one already-counted reference.
    pub fn adopt(obj: Arc<T>) -> Self {
        debug_assert!(obj.ref_count().get() >= 1);
        Self { obj: Some(obj) }
    }

    fn arc(&self) -> &Arc<T> {
        self.obj.as_ref().expect("handle already consumed")
    }

    fn into_arc(mut self) -> Arc<T> {
        self.obj.take().expect("handle already consumed")
    }

    /// Query the object for a capability.
    ///
    /// A supported identifier takes a new counted reference; an
    /// unsupported one fails with `NoSuchInterface` and leaves the count
    /// untouched. Every supported identifier aliases the same instance.
    pub fn query_interface(&self, iid: &Guid) -> Result<ComRef<T>> {
        let obj = self.arc();
        if !obj.iids().contains(iid) {
            return Err(ComError::NoSuchInterface(*iid));
        }
        obj.ref_count().increment();
        Ok(Self {
            obj: Some(Arc::clone(obj)),
        })
    }

    /// Take an additional counted reference.
    pub fn retain(&self) -> ComRef<T> {
        self.clone()
    }

    /// Give this handle's reference back, returning the remaining count.
    /// At zero the object is destroyed before this returns.
    pub fn release(self) -> u32 {
        let obj = self.into_arc();
        let remaining = obj.ref_count().decrement();
        drop(obj);
        remaining
    }

    /// Current reference count.
    pub fn refs(&self) -> u32 {
        self.arc().ref_count().get()
    }

    /// Non-owning observer; upgrades fail once the object is destroyed.
    pub fn downgrade(&self) -> Weak<T> {
        Arc::downgrade(self.arc())
    }
}

impl<T: Unknown> ComRef<T> {
    /// Move a newly constructed object behind its first handle.
    pub fn new(obj: T) -> Self {
        Self::adopt(Arc::new(obj))
    }
}

impl<T: ComObject> ComRef<T> {
    /// Erase the concrete type; the reference moves to the result.
    pub fn into_object(self) -> ComRef<dyn ComObject> {
        let obj: Arc<dyn ComObject> = self.into_arc();
        ComRef::adopt(obj)
    }
}

impl<T: ClassFactory> ComRef<T> {
    /// Erase to the factory contract; the reference moves to the result.
    pub fn into_factory(self) -> ComRef<dyn ClassFactory> {
        let obj: Arc<dyn ClassFactory> = self.into_arc();
        ComRef::adopt(obj)
    }
}

impl ComRef<dyn ComObject> {
    /// Recover the concrete type behind an erased handle; the reference
    /// moves to the result. A wrong type hands the handle back
    /// unchanged.
    pub fn cast<T: ComObject>(self) -> std::result::Result<ComRef<T>, Self> {
        let obj = self.into_arc();
        match Arc::clone(&obj).into_any().downcast::<T>() {
            Ok(typed) => {
                drop(obj);
                Ok(ComRef::adopt(typed))
            }
            Err(_) => Err(ComRef::adopt(obj)),
        }
    }

    /// Query the automation view, taking a new counted reference.
    pub fn query_dispatch(&self) -> Result<ComRef<dyn Dispatch>> {
        let obj = self.arc();
        if !obj.iids().contains(&iid::DISPATCH) {
            return Err(ComError::NoSuchInterface(iid::DISPATCH));
        }
        match Arc::clone(obj).into_dispatch() {
            Some(view) => {
                obj.ref_count().increment();
                Ok(ComRef::adopt(view))
            }
            None => Err(ComError::NoSuchInterface(iid::DISPATCH)),
        }
    }
}

impl<T: Unknown + ?Sized> Clone for ComRef<T> {
    fn clone(&self) -> Self {
        let obj = self.arc();
        obj.ref_count().increment();
        Self {
            obj: Some(Arc::clone(obj)),
        }
    }
}

impl<T: Unknown + ?Sized> Drop for ComRef<T> {
    fn drop(&mut self) {
        if let Some(obj) = self.obj.take() {
            obj.ref_count().decrement();
        }
    }
}

impl<T: Unknown + ?Sized> Deref for ComRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.obj.as_deref().expect("handle already consumed")
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::object::{DispId, RefCount};
    use crate::types::Variant;

    const IID_WIDGET: Guid = Guid::new(0x1111_1111, 0x1111, 0x1111, [0x11; 8]);
    const IID_MISSING: Guid = Guid::new(0x2222_2222, 0x2222, 0x2222, [0x22; 8]);

    const WIDGET_IIDS: &[Guid] = &[iid::UNKNOWN, iid::DISPATCH, IID_WIDGET];

    struct Widget {
        refs: RefCount,
        drops: Arc<AtomicU32>,
    }

    impl Widget {
        fn create(drops: Arc<AtomicU32>) -> ComRef<Widget> {
            ComRef::new(Widget {
                refs: RefCount::new(),
                drops,
            })
        }
    }

    impl Drop for Widget {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Unknown for Widget {
        fn iids(&self) -> &[Guid] {
            WIDGET_IIDS
        }

        fn ref_count(&self) -> &RefCount {
            &self.refs
        }
    }

    impl ComObject for Widget {
        fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
            self
        }

        fn into_dispatch(self: Arc<Self>) -> Option<Arc<dyn Dispatch>> {
            Some(self)
        }
    }

    impl Dispatch for Widget {
        fn ids_of_names(&self, name: &str) -> Result<DispId> {
            Err(ComError::UnknownName(name.to_string()))
        }

        fn invoke(&self, _dispid: DispId, _args: &[Variant]) -> Result<Variant> {
            Ok(Variant::Empty)
        }
    }

    const GADGET_IIDS: &[Guid] = &[iid::UNKNOWN];

    struct Gadget {
        refs: RefCount,
    }

    impl Gadget {
        fn create() -> ComRef<Gadget> {
            ComRef::new(Gadget {
                refs: RefCount::new(),
            })
        }
    }

    impl Unknown for Gadget {
        fn iids(&self) -> &[Guid] {
            GADGET_IIDS
        }

        fn ref_count(&self) -> &RefCount {
            &self.refs
        }
    }

    impl ComObject for Gadget {
        fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
            self
        }

        fn into_dispatch(self: Arc<Self>) -> Option<Arc<dyn Dispatch>> {
            None
        }
    }

    #[test]
    fn test_query_supported_takes_one_reference() {
        let drops = Arc::new(AtomicU32::new(0));
        let widget = Widget::create(Arc::clone(&drops));

        for requested in [iid::UNKNOWN, iid::DISPATCH, IID_WIDGET] {
            let before = widget.refs();
            let view = widget.query_interface(&requested).unwrap();
            assert_eq!(view.refs(), before + 1);
            assert_eq!(view.release(), before);
        }
    }

    #[test]
    fn test_query_unsupported_is_side_effect_free() {
        let drops = Arc::new(AtomicU32::new(0));
        let widget = Widget::create(Arc::clone(&drops));

        let result = widget.query_interface(&IID_MISSING);
        assert!(matches!(result, Err(ComError::NoSuchInterface(id)) if id == IID_MISSING));
        assert_eq!(widget.refs(), 1);
        assert_eq!(drops.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_retain_release_restores_count() {
        let drops = Arc::new(AtomicU32::new(0));
        let widget = Widget::create(Arc::clone(&drops));

        let extra = widget.retain();
        assert_eq!(widget.refs(), 2);
        assert_eq!(extra.release(), 1);
        assert_eq!(widget.refs(), 1);
    }

    #[test]
    fn test_release_to_zero_destroys_exactly_once() {
        let drops = Arc::new(AtomicU32::new(0));
        let widget = Widget::create(Arc::clone(&drops));
        let observer = widget.downgrade();

        assert_eq!(widget.release(), 0);
        assert!(observer.upgrade().is_none());
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases_reference() {
        let drops = Arc::new(AtomicU32::new(0));
        let widget = Widget::create(Arc::clone(&drops));

        drop(widget.retain());
        assert_eq!(widget.refs(), 1);

        drop(widget);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    // The construction choreography factories use: build with one
    // reference, query for the requested capability, discharge the
    // constructor reference.
    fn construct_as(drops: &Arc<AtomicU32>, requested: &Guid) -> Result<ComRef<dyn ComObject>> {
        let object = Widget::create(Arc::clone(drops)).into_object();
        let handle = object.query_interface(requested)?;
        object.release();
        Ok(handle)
    }

    #[test]
    fn test_construction_hands_out_exactly_one_reference() {
        let drops = Arc::new(AtomicU32::new(0));
        let handle = construct_as(&drops, &IID_WIDGET).unwrap();
        assert_eq!(handle.refs(), 1);
        assert_eq!(drops.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failed_construction_leaves_no_live_instance() {
        let drops = Arc::new(AtomicU32::new(0));
        let result = construct_as(&drops, &IID_MISSING);
        assert!(matches!(result, Err(ComError::NoSuchInterface(_))));
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cast_transfers_the_reference() {
        let drops = Arc::new(AtomicU32::new(0));
        let erased = Widget::create(Arc::clone(&drops)).into_object();
        assert_eq!(erased.refs(), 1);

        let typed = match erased.cast::<Widget>() {
            Ok(typed) => typed,
            Err(_) => panic!("widget instance expected"),
        };
        assert_eq!(typed.refs(), 1);
        assert_eq!(drops.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cast_to_wrong_type_hands_the_handle_back() {
        let drops = Arc::new(AtomicU32::new(0));
        let erased = Widget::create(Arc::clone(&drops)).into_object();

        let erased = match erased.cast::<Gadget>() {
            Ok(_) => panic!("widget cast as gadget"),
            Err(handle) => handle,
        };
        assert_eq!(erased.refs(), 1);
        assert_eq!(drops.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_query_dispatch_is_counted() {
        let drops = Arc::new(AtomicU32::new(0));
        let erased = Widget::create(Arc::clone(&drops)).into_object();

        let view = erased.query_dispatch().unwrap();
        assert_eq!(erased.refs(), 2);
        assert_eq!(view.release(), 1);
    }

    #[test]
    fn test_query_dispatch_without_automation_view() {
        let erased = Gadget::create().into_object();
        assert!(matches!(
            erased.query_dispatch(),
            Err(ComError::NoSuchInterface(_))
        ));
        assert_eq!(erased.refs(), 1);
    }
}
