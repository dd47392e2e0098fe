use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # Allocating a block that holds 1024 entries
      %BINARY_NAME% data.blk create --slots 1024

      # Allocating a 64 KB block
      %BINARY_NAME% data.blk create --size 64kb

      # Storing a value (prints the value it replaced, or "none")
      %BINARY_NAME% data.blk put 42 1000

      # Reading a value
      %BINARY_NAME% data.blk get 42

      # Displaying block file info
      %BINARY_NAME% data.blk info
"#};
