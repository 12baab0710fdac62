use rscond::{serde_json, CondContext, CondFunc, CondValue};

fn main() {
    let args: Vec<_> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <json values...>", args[0]);
        return;
    }

    let values: Vec<CondValue> = args[1..]
        .iter()
        .map(|arg| match serde_json::from_str::<serde_json::Value>(arg) {
            Ok(json) => CondValue::from(json),
            Err(_) => CondValue::from_str(arg),
        })
        .collect();

    let ctx = CondContext::new();
    let first = values[0].clone();

    println!("if   => {}", ctx.if_(&[first.clone(), "truthy".into(), "falsy".into()]));
    println!("or   => {}", ctx.or(&[first, "fallback".into()]));
    println!("coalesce => {}", ctx.coalesce(&values));

    let all = values.clone();
    let judge = ctx.clone();
    let scan = CondFunc::lazy("scan", move || {
        all.iter()
            .filter(|v| judge.if_(&[(*v).clone(), true.into(), false.into()]) == CondValue::true_())
            .count() as u64
    });
    ctx.time_call(&scan);
}
