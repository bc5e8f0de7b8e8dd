//! Calldata encoding for the L2 side of a deposit.
//!
//! A [`CallDescriptor`] is checked against its ABI when it is built, so a descriptor that exists
//! always names a declared function with arguments of the right arity and types.

use alloy_dyn_abi::{DynSolType, DynSolValue, JsonAbiExt, Specifier};
use alloy_json_abi::{Function, JsonAbi};
use alloy_primitives::{Bytes, Selector, U256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("function \"{0}\" not found in ABI")]
    UnknownFunction(String),
    #[error("{signature} takes {expected} arguments, got {got}")]
    ArityMismatch { signature: String, expected: usize, got: usize },
    #[error("argument {index} of {signature}: expected {expected}, got {got}")]
    TypeMismatch { signature: String, index: usize, expected: String, got: String },
    #[error("argument {index} of {signature}: value does not fit in {ty}")]
    ValueOutOfRange { signature: String, index: usize, ty: String },
    #[error("no overload of \"{0}\" accepts the given arguments")]
    NoMatchingOverload(String),
    #[error("arguments match more than one overload of \"{0}\"")]
    AmbiguousOverload(String),
    #[error("invalid function signature: {0}")]
    InvalidSignature(String),
    #[error("invalid argument {index}: {source}")]
    InvalidArgument { index: usize, source: alloy_dyn_abi::Error },
    #[error("invalid JSON ABI: {0}")]
    InvalidAbi(#[from] serde_json::Error),
    #[error("ABI encoding failed: {0}")]
    Abi(#[from] alloy_dyn_abi::Error),
}

/// A contract function together with the arguments to call it with.
#[derive(Debug, Clone, PartialEq)]
pub struct CallDescriptor {
    function: Function,
    args: Vec<DynSolValue>,
}

impl CallDescriptor {
    /// Look up `function_name` in `abi` and bind `args` to it.
    ///
    /// Overloads are resolved by argument types; exactly one overload must accept `args`.
    pub fn new(
        abi: &JsonAbi,
        function_name: &str,
        args: Vec<DynSolValue>,
    ) -> Result<Self, EncodingError> {
        let overloads = abi
            .function(function_name)
            .filter(|overloads| !overloads.is_empty())
            .ok_or_else(|| EncodingError::UnknownFunction(function_name.to_string()))?;

        // A single candidate reports the precise mismatch instead of a generic overload error.
        if let [function] = overloads.as_slice() {
            return Self::from_function(function.clone(), args);
        }

        let mut matching = overloads.iter().filter(|f| check_args(f, &args).is_ok());
        match (matching.next(), matching.next()) {
            (Some(function), None) => Ok(Self { function: function.clone(), args }),
            (None, _) => Err(EncodingError::NoMatchingOverload(function_name.to_string())),
            (Some(_), Some(_)) => Err(EncodingError::AmbiguousOverload(function_name.to_string())),
        }
    }

    /// Same as [`new`](Self::new), reading the ABI from its JSON form.
    pub fn from_json(
        abi_json: &str,
        function_name: &str,
        args: Vec<DynSolValue>,
    ) -> Result<Self, EncodingError> {
        let abi: JsonAbi = serde_json::from_str(abi_json)?;
        Self::new(&abi, function_name, args)
    }

    /// Bind `args` to an already resolved function.
    pub fn from_function(
        function: Function,
        args: Vec<DynSolValue>,
    ) -> Result<Self, EncodingError> {
        check_args(&function, &args)?;
        Ok(Self { function, args })
    }

    /// Build a descriptor from a human-readable signature and string arguments.
    ///
    /// ```ignore
    /// let call = CallDescriptor::parse("transfer(address,uint256)", &["0xdead...beef", "1000"])?;
    /// ```
    pub fn parse<S: AsRef<str>>(signature: &str, args: &[S]) -> Result<Self, EncodingError> {
        let function =
            Function::parse(signature).map_err(|e| EncodingError::InvalidSignature(e.to_string()))?;

        if function.inputs.len() != args.len() {
            return Err(EncodingError::ArityMismatch {
                signature: function.signature(),
                expected: function.inputs.len(),
                got: args.len(),
            });
        }

        let values = function
            .inputs
            .iter()
            .zip(args)
            .enumerate()
            .map(|(index, (param, arg))| {
                let ty: DynSolType = param.resolve()?;
                ty.coerce_str(arg.as_ref())
                    .map_err(|source| EncodingError::InvalidArgument { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { function, args: values })
    }

    #[inline]
    pub fn function_name(&self) -> &str {
        &self.function.name
    }

    #[inline]
    pub fn function(&self) -> &Function {
        &self.function
    }

    #[inline]
    pub fn args(&self) -> &[DynSolValue] {
        &self.args
    }

    /// Canonical signature, e.g. `foo(uint256)`.
    pub fn signature(&self) -> String {
        self.function.signature()
    }

    pub fn selector(&self) -> Selector {
        self.function.selector()
    }
}

/// Encode a call as `selector ‖ abi.encode(args)`.
pub fn encode_call(call: &CallDescriptor) -> Result<Bytes, EncodingError> {
    let data = call.function.abi_encode_input(&call.args)?;
    Ok(data.into())
}

fn check_args(function: &Function, args: &[DynSolValue]) -> Result<(), EncodingError> {
    if function.inputs.len() != args.len() {
        return Err(EncodingError::ArityMismatch {
            signature: function.signature(),
            expected: function.inputs.len(),
            got: args.len(),
        });
    }

    for (index, (param, arg)) in function.inputs.iter().zip(args).enumerate() {
        let ty: DynSolType = param.resolve()?;
        if !ty.matches(arg) {
            return Err(EncodingError::TypeMismatch {
                signature: function.signature(),
                index,
                expected: ty.sol_type_name().into_owned(),
                got: arg
                    .as_type()
                    .map(|t| t.sol_type_name().into_owned())
                    .unwrap_or_else(|| "unknown".to_string()),
            });
        }
        if !fits_declared_size(arg) {
            return Err(EncodingError::ValueOutOfRange {
                signature: function.signature(),
                index,
                ty: ty.sol_type_name().into_owned(),
            });
        }
    }

    Ok(())
}

/// `DynSolType::matches` only compares widths, so a `Uint(300, 8)` still matches `uint8`.
fn fits_declared_size(value: &DynSolValue) -> bool {
    match value {
        DynSolValue::Uint(v, bits) => *bits >= 256 || v.bit_len() <= *bits,
        DynSolValue::Int(v, bits) => {
            if *bits == 0 || *bits >= 256 {
                return true;
            }
            // two's complement: everything from the sign bit up must be a sign extension
            let high = v.into_raw() >> (*bits - 1);
            high.is_zero() || high == U256::MAX >> (*bits - 1)
        }
        DynSolValue::FixedBytes(word, size) => word.iter().skip(*size).all(|b| *b == 0),
        DynSolValue::Array(values)
        | DynSolValue::FixedArray(values)
        | DynSolValue::Tuple(values) => values.iter().all(fits_declared_size),
        _ => true,
    }
}
