#![no_main]

use libfuzzer_sys::fuzz_target;
use namescope::prelude::*;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let fixed = fix_legacy_formats(text);
    assert_eq!(fix_legacy_formats(&fixed), fixed);

    let t = TypeName::parse(text);
    let _ = t.type_parameters();
    let _ = t.declaring_type();
    let _ = t.to_readable();
    let _ = t.to_anonymous();
    let _ = t.remove_generics();

    if let Ok(m) = MethodName::new(text) {
        let _ = m.parameters();
        let _ = m.type_parameters();
        let _ = m.to_anonymous();
    }
    if let Ok(p) = PropertyName::new(text) {
        let _ = p.parameters();
        let _ = p.to_anonymous();
    }
    let _ = FieldName::new(text).map(|f| f.to_anonymous());
    let _ = EventName::new(text).map(|e| e.to_anonymous());
    let _ = ParameterName::new(text).map(|p| p.to_anonymous());
    let _ = LocalVariableName::new(text).map(|l| l.to_anonymous());
    let _ = LambdaName::new(text).map(|l| l.to_anonymous());

    if let Ok(name) = deserialize(text) {
        let _ = serialize(&name);
        let _ = name.to_anonymous();
        let _ = name.to_readable();
    }
});
