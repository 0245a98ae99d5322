use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DESCRIPTOR_ARGS: Regex = Regex::new(r"^\(([^)]*)\)").unwrap();
}

/// Symbol used when the method name is not overloaded among natives.
pub fn short_name(class_name: &str, method_name: &str) -> String {
    format!("Java_{}_{}", escape(class_name), escape(method_name))
}

/// Symbol for overloaded natives: short name plus the mangled argument types.
pub fn long_name(class_name: &str, method_name: &str, descriptor: &str) -> Option<String> {
    let args = DESCRIPTOR_ARGS.captures(descriptor)?.get(1)?.as_str();
    Some(format!("{}__{}", short_name(class_name, method_name), escape(args)))
}

pub fn escape(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' => res.push(c),
            '/' | '.' => res.push('_'),
            '_' => res.push_str("_1"),
            ';' => res.push_str("_2"),
            '[' => res.push_str("_3"),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    res.push_str(&format!("_0{:04x}", unit));
                }
            }
        }
    }
    res
}
