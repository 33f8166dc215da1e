use sum_lambda::lambda_handler;

#[sum_lambda_macros::main_func]
fn main() -> Result<(), sum_lambda_runtime::Error> {
    sum_lambda_runtime::run(lambda_handler)
}
