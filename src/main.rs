use std::io;

use rowdb::repl;
use rowdb::storage::Table;

fn main() -> rowdb::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    // The table lives for the whole session and is torn down in one pass
    // when it drops, after the loop returns.
    let mut table = Table::default();
    repl::run(stdin.lock(), &mut stdout.lock(), &mut table)
}
