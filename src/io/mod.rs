/*!
# IO

Utilities for writing a graph to and reading it back from its textual
adjacency-list dump.

The format prints one line per vertex:

```text
Vertex 0: -> (1, weight: 4) -> (2, weight: 1)
Vertex 1: -> (0, weight: 4)
Vertex 2: -> (0, weight: 1)
```

Every undirected edge appears under both of its endpoints; the reader folds
the two occurrences back into a single edge, so writing a graph and parsing
the text reproduces the original edge multiset.
*/

pub mod adjacency_list;

use crate::prelude::*;

pub use adjacency_list::*;

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;
