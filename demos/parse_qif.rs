use qif_rs::QifBuilder;
use std::env;

const SAMPLE_QIF: &str = "!Type:Bank
D02/01/2010
T-10.00
LDebit
MSupermarket
N1001
^
D03/01/2010
T1500.00
LCredit
MPayroll
^
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut reader = if args.len() > 1 {
        QifBuilder::new().filepath(&args[1]).reader()?
    } else {
        println!("Using built-in sample QIF data\n");
        QifBuilder::new().content(SAMPLE_QIF).reader()?
    };

    if !reader.header().is_empty() {
        println!("Section: {}\n", reader.header());
    }
    println!("Found {} transactions\n", reader.len());

    let mut index = 0;
    reader.each(|tx| {
        index += 1;
        println!("Transaction {}:", index);
        println!("  Date: {}", tx.date);
        if let Some(amount) = &tx.amount {
            println!("  Amount: {}", amount);
        }
        if let Some(name) = &tx.name {
            println!("  Payee: {}", name);
        }
        if let Some(description) = &tx.description {
            println!("  Memo: {}", description);
        }
        if let Some(check_number) = &tx.check_number {
            println!("  Check: {}", check_number);
        }
        println!();
    });

    Ok(())
}
