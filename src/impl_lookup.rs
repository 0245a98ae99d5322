use std::ptr::null_mut;

use jni::JNIEnv;
use jni::objects::JObject;
use jni::signature::JavaType;
use jni::sys::jobject;
use log::{debug, trace};

use crate::errors::LookupError;

/// A static object field looked up by name through the native interface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StaticObjectField {
    pub class: &'static str,
    pub name: &'static str,
    pub descriptor: &'static str,
}

/// The trusted lookup every managed-side opening accessor is built from.
pub const IMPL_LOOKUP: StaticObjectField = StaticObjectField {
    class: "java/lang/invoke/MethodHandles$Lookup",
    name: "IMPL_LOOKUP",
    descriptor: "Ljava/lang/invoke/MethodHandles$Lookup;",
};

impl StaticObjectField {
    /// FindClass, GetStaticFieldID, GetStaticObjectField. Nothing is cached between calls.
    pub fn read<'local>(&self, env: &mut JNIEnv<'local>) -> Result<JObject<'local>, LookupError> {
        trace!("resolving class {}", self.class);
        let class = env.find_class(self.class).map_err(|source| LookupError::ClassNotResolved {
            class: self.class,
            source,
        })?;

        trace!("resolving static field {}.{}:{}", self.class, self.name, self.descriptor);
        let field_id = env.get_static_field_id(&class, self.name, self.descriptor).map_err(|source| LookupError::FieldNotResolved {
            class: self.class,
            name: self.name,
            descriptor: self.descriptor,
            source,
        })?;

        let value = self.value_type()
            .and_then(|ty| env.get_static_field_unchecked(&class, field_id, ty))
            .and_then(|value| value.l())
            .map_err(|source| LookupError::FieldNotRead {
                class: self.class,
                name: self.name,
                source,
            })?;
        if value.is_null() {
            return Err(LookupError::NullValue {
                class: self.class,
                name: self.name,
            });
        }
        debug!("read {}.{}", self.class, self.name);
        Ok(value)
    }

    fn value_type(&self) -> Result<JavaType, jni::errors::Error> {
        self.descriptor.parse::<JavaType>()
    }
}

/// Shared body of every exported `nativeImplLookup` symbol.
pub fn native_impl_lookup(mut env: JNIEnv) -> jobject {
    match IMPL_LOOKUP.read(&mut env) {
        Ok(lookup) => lookup.into_raw(),
        Err(err) => {
            err.raise(&mut env);
            null_mut()
        }
    }
}
