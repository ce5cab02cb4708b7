use crate::args::ValidateArgs;
use crate::commands::Out;

/// Reports whether the text in `args` is valid for its kind.
pub fn validate(args: &ValidateArgs) -> Out<bool> {
    let valid = crate::validate::validate(args.text(), args.kind());
    let message = if valid {
        format!("'{}' is a valid {}", args.text(), args.kind())
    } else {
        format!("'{}' is not a valid {}", args.text(), args.kind())
    };
    Out::new(message, valid)
}
