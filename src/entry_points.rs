use crate::mangling::{long_name, short_name};

/// A `native` method declared on the managed side that this library provides.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NativeMethod {
    pub class_name: &'static str,
    pub method_name: &'static str,
    pub descriptor: &'static str,
}

impl NativeMethod {
    pub fn symbol(&self) -> String {
        short_name(self.class_name, self.method_name)
    }

    pub fn overloaded_symbol(&self) -> Option<String> {
        long_name(self.class_name, self.method_name, self.descriptor)
    }
}

const NATIVE_IMPL_LOOKUP_DESCRIPTOR: &str = "()Ljava/lang/invoke/MethodHandles$Lookup;";

pub const RUNTIME_NATIVE_IMPL_LOOKUP: NativeMethod = NativeMethod {
    class_name: "dev/lukebemish/opensesame/runtime/NativeImplementations",
    method_name: "nativeImplLookup",
    descriptor: NATIVE_IMPL_LOOKUP_DESCRIPTOR,
};

pub const NATIVES_NATIVE_IMPL_LOOKUP: NativeMethod = NativeMethod {
    class_name: "dev/lukebemish/opensesame/natives/NativeImplementations",
    method_name: "nativeImplLookup",
    descriptor: NATIVE_IMPL_LOOKUP_DESCRIPTOR,
};

/// Same order as [`crate::EXPORTED_SYMBOLS`].
pub const ENTRY_POINTS: [NativeMethod; 2] = [RUNTIME_NATIVE_IMPL_LOOKUP, NATIVES_NATIVE_IMPL_LOOKUP];

#[cfg(test)]
pub mod test {
    use crate::entry_points::{NATIVES_NATIVE_IMPL_LOOKUP, RUNTIME_NATIVE_IMPL_LOOKUP};

    #[test]
    pub fn test_symbols() {
        assert_eq!(RUNTIME_NATIVE_IMPL_LOOKUP.symbol(), "Java_dev_lukebemish_opensesame_runtime_NativeImplementations_nativeImplLookup");
        assert_eq!(NATIVES_NATIVE_IMPL_LOOKUP.symbol(), "Java_dev_lukebemish_opensesame_natives_NativeImplementations_nativeImplLookup");
    }

    #[test]
    pub fn test_no_arg_overload_symbol() {
        assert_eq!(RUNTIME_NATIVE_IMPL_LOOKUP.overloaded_symbol().unwrap(), "Java_dev_lukebemish_opensesame_runtime_NativeImplementations_nativeImplLookup__");
    }
}
