use crate::DynamicArray;
use display_tree::{DisplayTree, Style};
use std::fmt::{Display, Formatter};

impl<T: Display> DisplayTree for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter, style: Style) -> std::fmt::Result {
        let indentation = style.indentation as usize - 1;
        let horizontal_bar = format!("{:indentation$}", style.char_set.horizontal);
        let header = format!(
            "DynamicArray [len {}, capacity {}]",
            self.len(),
            self.capacity()
        );
        write!(f, "{}", style.leaf_style.apply(&header))?;

        let max_index = self.len().saturating_sub(1);
        let num_width = format!("{max_index}").len();

        for (n, item) in self.iter().enumerate() {
            let connector = if n < max_index {
                style.char_set.connector
            } else {
                style.char_set.end_connector
            };
            let branch = format!("{connector}{horizontal_bar}{n:0num_width$}: ");
            write!(
                f,
                "\n{}{}",
                style.branch_style.apply(&branch),
                style.leaf_style.apply(&item.to_string())
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use display_tree::AsTree;

    use crate::DynamicArray;

    #[test]
    fn short_tree() {
        let array = DynamicArray::from([10, 20, 30]);
        let tree = AsTree::new(&array);

        insta::assert_snapshot!(tree, @r"
        DynamicArray [len 3, capacity 10]
        ├─0: 10
        ├─1: 20
        └─2: 30
        ");
    }

    #[test]
    fn empty_tree() {
        let mut array = DynamicArray::from(["only"]);
        array.clear();
        array.trim_to_size();

        insta::assert_snapshot!(AsTree::new(&array), @"DynamicArray [len 0, capacity 0]");
    }

    #[test]
    fn long_tree_pads_indices() {
        let array: DynamicArray<String> = (0..12).map(|n| format!("item_{n}")).collect();
        let tree = AsTree::new(&array);

        insta::assert_snapshot!(tree, @r"
        DynamicArray [len 12, capacity 12]
        ├─00: item_0
        ├─01: item_1
        ├─02: item_2
        ├─03: item_3
        ├─04: item_4
        ├─05: item_5
        ├─06: item_6
        ├─07: item_7
        ├─08: item_8
        ├─09: item_9
        ├─10: item_10
        └─11: item_11
        ");
    }
}
