//! Native half of the opensesame lookup provider.
//!
//! The managed side declares `static native MethodHandles.Lookup nativeImplLookup()` on
//! `NativeImplementations` in two packages. Both bind to the same body here, which hands back
//! the runtime's `MethodHandles.Lookup.IMPL_LOOKUP`.

use jni::JNIEnv;
use jni::objects::JClass;
use jni::sys::jobject;

pub mod entry_points;
pub mod errors;
pub mod impl_lookup;
pub mod mangling;
pub mod platform;

macro_rules! impl_lookup_entry_points {
    ($($symbol:ident),+ $(,)?) => {
        $(
            #[no_mangle]
            #[allow(non_snake_case)]
            pub extern "system" fn $symbol<'local>(env: JNIEnv<'local>, _class: JClass<'local>) -> jobject {
                impl_lookup::native_impl_lookup(env)
            }
        )+

        /// Names of every symbol exported for the loader, in declaration order.
        pub const EXPORTED_SYMBOLS: &[&str] = &[$(stringify!($symbol)),+];
    };
}

impl_lookup_entry_points! {
    Java_dev_lukebemish_opensesame_runtime_NativeImplementations_nativeImplLookup,
    Java_dev_lukebemish_opensesame_natives_NativeImplementations_nativeImplLookup,
}

#[cfg(test)]
pub mod test {
    use crate::entry_points::ENTRY_POINTS;
    use crate::EXPORTED_SYMBOLS;

    #[test]
    pub fn exported_symbols_match_managed_declarations() {
        assert_eq!(EXPORTED_SYMBOLS.len(), ENTRY_POINTS.len());
        for (exported, declared) in EXPORTED_SYMBOLS.iter().zip(ENTRY_POINTS.iter()) {
            assert_eq!(*exported, declared.symbol());
        }
    }
}
