use blocknav_tree::{
    BlockId, BlockTree, ConnectionId, ConnectionKind, FieldId, InputId, InputKind, Workspace,
};

/// Three stacks covering every location type.
///
/// ```text
/// stack 0  controls_if            previous, next
///            IF0   value     [mode*, "if"]   <- cond (output)
///                                                A   value  []
///                                                OP  dummy  [op*]
///            DO    statement ["do"]          <- nested -> nested_after
///            ELSE  dummy     [note*]
///          after                  previous, next
///            ROW   value     [f1*, f2, f3*, f4*]
///            TAIL  statement []
/// stack 1  expr                   output
///            NUM   dummy     [num*]
/// stack 2  hat                    next
///            NAME  dummy     [name*]
/// ```
pub struct Fixture {
    pub ws: Workspace,

    pub if_block: BlockId,
    pub if_previous: ConnectionId,
    pub if_next: ConnectionId,
    pub if_input: InputId,
    pub cond_socket: ConnectionId,
    pub mode_field: FieldId,
    pub do_input: InputId,
    pub do_socket: ConnectionId,
    pub else_input: InputId,
    pub note_field: FieldId,

    pub cond: BlockId,
    pub cond_output: ConnectionId,
    pub cond_a_socket: ConnectionId,
    pub op_field: FieldId,

    pub nested: BlockId,
    pub nested_previous: ConnectionId,
    pub nested_next: ConnectionId,
    pub nested_after: BlockId,

    pub after: BlockId,
    pub after_previous: ConnectionId,
    pub after_next: ConnectionId,
    pub row_input: InputId,
    pub row_socket: ConnectionId,
    pub f1: FieldId,
    pub f2: FieldId,
    pub f3: FieldId,
    pub f4: FieldId,
    pub tail_socket: ConnectionId,

    pub expr: BlockId,
    pub expr_output: ConnectionId,
    pub num_field: FieldId,

    pub hat: BlockId,
    pub hat_next: ConnectionId,
}

impl Fixture {
    pub fn new() -> Self {
        let mut ws = Workspace::new();

        let if_block = ws
            .block("controls_if")
            .statement()
            .input(InputKind::Value, "IF0", |row| {
                row.editable("mode").label("if");
            })
            .input(InputKind::Statement, "DO", |row| {
                row.label("do");
            })
            .input(InputKind::Dummy, "ELSE", |row| {
                row.editable("note");
            })
            .build();
        let cond = ws
            .block("logic_compare")
            .output()
            .socket(InputKind::Value, "A")
            .input(InputKind::Dummy, "OP", |row| {
                row.editable("op");
            })
            .build();
        let nested = ws.block("nested").statement().build();
        let nested_after = ws.block("nested_after").statement().build();
        let after = ws
            .block("after")
            .statement()
            .input(InputKind::Value, "ROW", |row| {
                row.editable("f1").label("f2").editable("f3").editable("f4");
            })
            .socket(InputKind::Statement, "TAIL")
            .build();
        let expr = ws
            .block("math_number")
            .output()
            .input(InputKind::Dummy, "NUM", |row| {
                row.editable("num");
            })
            .build();
        let hat = ws
            .block("event_start")
            .next()
            .input(InputKind::Dummy, "NAME", |row| {
                row.editable("name");
            })
            .build();

        let inputs = ws.inputs(if_block).to_vec();
        let (if_input, do_input, else_input) = (inputs[0], inputs[1], inputs[2]);
        let cond_socket = ws.input_connection(if_input).unwrap();
        let do_socket = ws.input_connection(do_input).unwrap();

        let if_previous = ws.previous_connection(if_block).unwrap();
        let if_next = ws.next_connection(if_block).unwrap();
        let cond_output = ws.output_connection(cond).unwrap();
        let nested_previous = ws.previous_connection(nested).unwrap();
        let nested_next = ws.next_connection(nested).unwrap();
        let after_previous = ws.previous_connection(after).unwrap();

        ws.connect(cond_socket, cond_output).unwrap();
        ws.connect(do_socket, nested_previous).unwrap();
        ws.connect(nested_next, ws.previous_connection(nested_after).unwrap())
            .unwrap();
        ws.connect(if_next, after_previous).unwrap();

        let cond_inputs = ws.inputs(cond).to_vec();
        let after_inputs = ws.inputs(after).to_vec();
        let row = ws.fields(after_inputs[0]).to_vec();

        Self {
            if_previous,
            if_next,
            if_input,
            cond_socket,
            mode_field: ws.fields(if_input)[0],
            do_input,
            do_socket,
            else_input,
            note_field: ws.fields(else_input)[0],

            cond_output,
            cond_a_socket: ws.input_connection(cond_inputs[0]).unwrap(),
            op_field: ws.fields(cond_inputs[1])[0],

            nested_previous,
            nested_next,

            after_previous,
            after_next: ws.next_connection(after).unwrap(),
            row_input: after_inputs[0],
            row_socket: ws.input_connection(after_inputs[0]).unwrap(),
            f1: row[0],
            f2: row[1],
            f3: row[2],
            f4: row[3],
            tail_socket: ws.input_connection(after_inputs[1]).unwrap(),

            expr_output: ws.output_connection(expr).unwrap(),
            num_field: ws.fields(ws.inputs(expr)[0])[0],

            hat_next: ws.next_connection(hat).unwrap(),

            if_block,
            cond,
            nested,
            nested_after,
            after,
            expr,
            hat,
            ws,
        }
    }

    /// Stack roots in workspace order
    pub fn stacks(&self) -> [BlockId; 3] {
        [self.if_block, self.expr, self.hat]
    }
}

/// A tree whose stack list has lost every root, as an inconsistent host would
/// report it.
pub struct MissingStacks<'a>(pub &'a Workspace);

impl BlockTree for MissingStacks<'_> {
    fn top_blocks(&self) -> &[BlockId] {
        &[]
    }

    fn has_block(&self, block: BlockId) -> bool {
        self.0.has_block(block)
    }

    fn has_input(&self, input: InputId) -> bool {
        self.0.has_input(input)
    }

    fn has_connection(&self, connection: ConnectionId) -> bool {
        self.0.has_connection(connection)
    }

    fn has_field(&self, field: FieldId) -> bool {
        self.0.has_field(field)
    }

    fn previous_connection(&self, block: BlockId) -> Option<ConnectionId> {
        self.0.previous_connection(block)
    }

    fn next_connection(&self, block: BlockId) -> Option<ConnectionId> {
        self.0.next_connection(block)
    }

    fn output_connection(&self, block: BlockId) -> Option<ConnectionId> {
        self.0.output_connection(block)
    }

    fn inputs(&self, block: BlockId) -> &[InputId] {
        self.0.inputs(block)
    }

    fn input_block(&self, input: InputId) -> Option<BlockId> {
        self.0.input_block(input)
    }

    fn fields(&self, input: InputId) -> &[FieldId] {
        self.0.fields(input)
    }

    fn input_connection(&self, input: InputId) -> Option<ConnectionId> {
        self.0.input_connection(input)
    }

    fn is_editable(&self, field: FieldId) -> bool {
        self.0.is_editable(field)
    }

    fn field_input(&self, field: FieldId) -> Option<InputId> {
        self.0.field_input(field)
    }

    fn source_block(&self, connection: ConnectionId) -> Option<BlockId> {
        self.0.source_block(connection)
    }

    fn target(&self, connection: ConnectionId) -> Option<ConnectionId> {
        self.0.target(connection)
    }

    fn parent_input(&self, connection: ConnectionId) -> Option<InputId> {
        self.0.parent_input(connection)
    }

    fn connection_kind(&self, connection: ConnectionId) -> Option<ConnectionKind> {
        self.0.connection_kind(connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_three_stacks() {
        let fx = Fixture::new();
        assert_eq!(fx.ws.top_blocks(), &fx.stacks());
        assert_eq!(fx.ws.root_block(fx.nested_after), Some(fx.if_block));
        assert_eq!(fx.ws.root_block(fx.cond), Some(fx.if_block));
        assert!(!fx.ws.is_editable(fx.f2));
        assert!(fx.ws.is_editable(fx.op_field));
        assert_eq!(fx.ws.connection_kind(fx.hat_next), Some(ConnectionKind::Next));
        assert_eq!(fx.ws.input_connection(fx.else_input), None);
        assert_eq!(fx.ws.field_input(fx.num_field), fx.ws.inputs(fx.expr).first().copied());
    }
}
