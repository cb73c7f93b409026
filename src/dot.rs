use std::fmt::{Display, Write};

use crate::node::Node;

/// Render the subtree rooted at `n` as a Graphviz digraph, one record per
/// node showing the center point and the size of its center set.
#[allow(unused)]
pub(crate) fn print_dot<P>(n: &Node<P>) -> String
where
    P: Display,
{
    let mut buf = String::new();

    let _ = writeln!(buf, "digraph {{");
    let _ = writeln!(buf, r#"node [shape = record;];"#);
    recurse(n, &mut buf);
    let _ = writeln!(buf, "}}");

    buf
}

#[allow(unused)]
fn recurse<P, W>(n: &Node<P>, buf: &mut W)
where
    P: Display,
    W: Write,
{
    writeln!(
        buf,
        r#""{}" [label="{} | overlapping={}"];"#,
        n.center(),
        n.center(),
        n.overlapping().len(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(buf, "\"{}\" -> \"{}\";", n.center(), v.center()).unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.center()).unwrap();
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}\" [style=invis];",
                    n.center(),
                    n.center()
                )
                .unwrap();
            }
        };
    }
}
