extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn, ReturnType};

/// Turns a function's `main` into a runtime-initialized entry point.
///
/// A `main` returning `Result<(), E>` becomes one returning
/// `std::process::ExitCode`, with the error logged on failure.
#[proc_macro_attribute]
pub fn main_func(_args: TokenStream, input: TokenStream) -> TokenStream {
    let ItemFn { sig, block, .. } = parse_macro_input!(input as ItemFn);

    let expanded = match sig.output {
        ReturnType::Default => quote! {
            fn main() {
                sum_lambda_runtime::internal_init();
                #block
            }
        },
        ReturnType::Type(_, output) => quote! {
            fn main() -> ::std::process::ExitCode {
                sum_lambda_runtime::internal_init();

                let result: #output = (move || -> #output #block)();
                sum_lambda_runtime::exit_code(result)
            }
        },
    };

    TokenStream::from(expanded)
}
