// tests/common/mod.rs
//
// Synthetic result pages shaped like the saved INPI search pages.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

pub struct Row<'a> {
    pub number: &'a str,
    pub date: &'a str,
    pub title: &'a str,
    pub ipc: &'a str,
}

pub fn page(cnpj: Option<&str>, count: &str, rows: &[Row<'_>]) -> String {
    let summary = match cnpj {
        Some(c) => format!("CPF ou CNPJ do Depositante: '{c}'"),
        None => "Nome do Depositante: 'ACME'".to_string(),
    };
    let mut body = String::new();
    for r in rows {
        body.push_str(&format!(
            r#"
        <tr>
          <td width="140" align="center"><font class="normal"><a href="PatenteServletController?Action=detail&amp;CodPedido={n}" class="visitado">{n}</a></font></td>
          <td width="80" align="center"><font class="normal">{d}</font></td>
          <td align="left"><font class="normal"><b>{t}</b></font></td>
          <td align="center"><font class="alerta">{i}</font></td>
        </tr>"#,
            n = r.number,
            d = r.date,
            t = r.title,
            i = r.ipc
        ));
    }
    format!(
        r##"<html>
<head><title>INPI - Consulta à Base de Dados do INPI</title></head>
<body>
  <table width="780" border="0">
    <tr><td><font class="marcador">Pesquisa por: {summary}</font></td></tr>
  </table>
  <div id="tituloEResumoContextGlobal">
    <font class="normal">Foram encontrados <b>{count}</b> processos que satisfazem à pesquisa. Mostrando página <b>1</b> de <b>1</b>.</font>
  </div>
  <table width="780" border="0" cellpadding="0" cellspacing="1">
    <tr bgcolor="#D2D2D2">
      <td align="center"><font class="titulo">Pedido</font></td>
      <td align="center"><font class="titulo">Depósito</font></td>
      <td align="center"><font class="titulo">Título</font></td>
      <td align="center"><font class="titulo">IPC</font></td>
    </tr>{body}
  </table>
</body>
</html>"##
    )
}

/// Save `html` the way the portal does: Windows-1252 bytes.
pub fn write_cp1252(dir: &Path, name: &str, html: &str) {
    let (bytes, _, unmappable) = WINDOWS_1252.encode(html);
    assert!(!unmappable, "fixture has characters outside Windows-1252");
    fs::write(dir.join(name), bytes).unwrap();
}
