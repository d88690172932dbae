//! Instructions for enabling CORS on the Python Flask backend.
//!
//! The printed guide enables every origin. When the backend should only
//! accept the Vite dev server, the narrower form is:
//!
//! ```text
//! CORS(app, origins=['http://localhost:5173', 'http://127.0.0.1:5173'])
//! ```

use crate::utils::error::Result;
use std::io::Write;

pub const INSTRUCTIONS: &str = r#"
INSTRUÇÕES PARA CORRIGIR CORS NO BACKEND PYTHON:

1. Instale flask-cors:
   pip install flask-cors

2. Adicione no início do seu app.py:
   from flask_cors import CORS

3. Após criar a instância do Flask, adicione:
   app = Flask(__name__)
   CORS(app)  # <- Esta linha resolve o problema de CORS

4. Reinicie o servidor Python:
   python app.py

Exemplo completo:
```python
from flask import Flask
from flask_cors import CORS

app = Flask(__name__)
CORS(app)  # Permite requisições de qualquer origem

# ... resto do seu código
```
"#;

/// Writes the guide followed by a line terminator, then flushes.
pub fn write_instructions<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", INSTRUCTIONS)?;
    out.flush()?;
    Ok(())
}
