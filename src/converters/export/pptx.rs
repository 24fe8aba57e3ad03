use std::fmt::Write as _;
use std::io::{Cursor, Write as _};

use chrono::{TimeZone, Utc};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::constants::*;
use super::error::Result;
use super::utils::escape_xml;
use crate::config::ExportConfig;
use crate::models::presentation::Presentation;
use crate::models::slide::Slide;
use crate::models::theme::{primary_background, resolve_theme, Rgb, ThemeConfig};

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Colors applied to every slide of the deck, as DrawingML `RRGGBB` values.
struct DeckColors {
    background: String,
    text: String,
    accent: String,
}

impl DeckColors {
    fn from_theme(theme: &ThemeConfig) -> Self {
        DeckColors {
            background: Rgb::from_hex(&primary_background(theme)).to_drawing_hex(),
            text: Rgb::from_hex(theme.text_color).to_drawing_hex(),
            accent: Rgb::from_hex(theme.accent_color).to_drawing_hex(),
        }
    }
}

/// Renders a presentation as a 16:9 PPTX package.
///
/// # Arguments
///
/// * `presentation` - A reference to the `Presentation` object.
/// * `config` - Author and company written into the package properties.
///
/// # Returns
///
/// A `Result` containing the zipped package bytes.
pub fn render_pptx(presentation: &Presentation, config: &ExportConfig) -> Result<Vec<u8>> {
    let colors = DeckColors::from_theme(resolve_theme(Some(presentation.theme)));
    let slide_count = presentation.slides.len();

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut parts: Vec<(String, String)> = vec![
        ("[Content_Types].xml".to_string(), content_types_xml(slide_count)?),
        ("_rels/.rels".to_string(), root_rels_xml()),
        ("docProps/core.xml".to_string(), core_props_xml(presentation, config)),
        ("docProps/app.xml".to_string(), app_props_xml(config, slide_count)),
        ("ppt/presentation.xml".to_string(), presentation_xml(slide_count)?),
        (
            "ppt/_rels/presentation.xml.rels".to_string(),
            presentation_rels_xml(slide_count)?,
        ),
        ("ppt/slideMasters/slideMaster1.xml".to_string(), slide_master_xml()),
        (
            "ppt/slideMasters/_rels/slideMaster1.xml.rels".to_string(),
            slide_master_rels_xml(),
        ),
        ("ppt/slideLayouts/slideLayout1.xml".to_string(), slide_layout_xml()),
        (
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels".to_string(),
            slide_layout_rels_xml(),
        ),
        ("ppt/theme/theme1.xml".to_string(), theme_xml()),
    ];
    for (index, slide) in presentation.slides.iter().enumerate() {
        let number = index + 1;
        parts.push((
            format!("ppt/slides/slide{}.xml", number),
            slide_xml(slide, &colors)?,
        ));
        parts.push((
            format!("ppt/slides/_rels/slide{}.xml.rels", number),
            slide_rels_xml(),
        ));
    }

    for (path, xml) in &parts {
        zip.start_file(path.as_str(), options)?;
        zip.write_all(xml.as_bytes())?;
    }

    let bytes = zip.finish()?.into_inner();
    log::debug!(
        "Rendered {} slides to PPTX ({} parts, {} bytes)",
        slide_count,
        parts.len(),
        bytes.len()
    );
    Ok(bytes)
}

// --- Package parts ---

fn content_types_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::new();
    writeln!(xml, "{}", XML_DECL)?;
    writeln!(
        xml,
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#
    )?;
    writeln!(
        xml,
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#
    )?;
    writeln!(xml, r#"<Default Extension="xml" ContentType="application/xml"/>"#)?;
    let overrides = [
        ("/ppt/presentation.xml", "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"),
        ("/ppt/slideMasters/slideMaster1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"),
        ("/ppt/slideLayouts/slideLayout1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"),
        ("/ppt/theme/theme1.xml", "application/vnd.openxmlformats-officedocument.theme+xml"),
        ("/docProps/core.xml", "application/vnd.openxmlformats-package.core-properties+xml"),
        ("/docProps/app.xml", "application/vnd.openxmlformats-officedocument.extended-properties+xml"),
    ];
    for (part, content_type) in overrides {
        writeln!(
            xml,
            r#"<Override PartName="{}" ContentType="{}"/>"#,
            part, content_type
        )?;
    }
    for number in 1..=slide_count {
        writeln!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
            number
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

fn root_rels_xml() -> String {
    format!(
        r#"{decl}
<Relationships xmlns="{rels}">
<Relationship Id="rId1" Type="{base}/officeDocument" Target="ppt/presentation.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
<Relationship Id="rId3" Type="{base}/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#,
        decl = XML_DECL,
        rels = NS_PKG_RELS,
        base = REL_BASE
    )
}

fn w3c_timestamp(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .unwrap_or_default()
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

fn core_props_xml(presentation: &Presentation, config: &ExportConfig) -> String {
    format!(
        r#"{decl}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<dc:title>{title}</dc:title>
<dc:creator>{author}</dc:creator>
<cp:lastModifiedBy>{author}</cp:lastModifiedBy>
<dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created>
<dcterms:modified xsi:type="dcterms:W3CDTF">{modified}</dcterms:modified>
</cp:coreProperties>"#,
        decl = XML_DECL,
        title = escape_xml(&presentation.title),
        author = escape_xml(&config.author),
        created = w3c_timestamp(presentation.created_at),
        modified = w3c_timestamp(presentation.updated_at)
    )
}

fn app_props_xml(config: &ExportConfig, slide_count: usize) -> String {
    format!(
        r#"{decl}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">
<Application>Slidecraft</Application>
<Company>{company}</Company>
<Slides>{slides}</Slides>
</Properties>"#,
        decl = XML_DECL,
        company = escape_xml(&config.company),
        slides = slide_count
    )
}

fn presentation_xml(slide_count: usize) -> Result<String> {
    let mut slide_ids = String::new();
    for number in 1..=slide_count {
        // rId1 is the master and rId2 the theme; slides follow.
        write!(
            slide_ids,
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            255 + number,
            number + 2
        )?;
    }
    Ok(format!(
        r#"{decl}
<p:presentation xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">
<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
<p:sldIdLst>{slide_ids}</p:sldIdLst>
<p:sldSz cx="{cx}" cy="{cy}"/>
<p:notesSz cx="{cy}" cy="{cx}"/>
</p:presentation>"#,
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        slide_ids = slide_ids,
        cx = emu(DECK_WIDTH_IN),
        cy = emu(DECK_HEIGHT_IN)
    ))
}

fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::new();
    writeln!(xml, "{}", XML_DECL)?;
    writeln!(xml, r#"<Relationships xmlns="{}">"#, NS_PKG_RELS)?;
    writeln!(
        xml,
        r#"<Relationship Id="rId1" Type="{}/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#,
        REL_BASE
    )?;
    writeln!(
        xml,
        r#"<Relationship Id="rId2" Type="{}/theme" Target="theme/theme1.xml"/>"#,
        REL_BASE
    )?;
    for number in 1..=slide_count {
        writeln!(
            xml,
            r#"<Relationship Id="rId{}" Type="{}/slide" Target="slides/slide{}.xml"/>"#,
            number + 2,
            REL_BASE,
            number
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn empty_shape_tree() -> &'static str {
    r#"<p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld>"#
}

fn slide_master_xml() -> String {
    format!(
        r#"{decl}
<p:sldMaster xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">
{tree}
<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>
</p:sldMaster>"#,
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        tree = empty_shape_tree()
    )
}

fn slide_master_rels_xml() -> String {
    format!(
        r#"{decl}
<Relationships xmlns="{rels}">
<Relationship Id="rId1" Type="{base}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
<Relationship Id="rId2" Type="{base}/theme" Target="../theme/theme1.xml"/>
</Relationships>"#,
        decl = XML_DECL,
        rels = NS_PKG_RELS,
        base = REL_BASE
    )
}

fn slide_layout_xml() -> String {
    format!(
        r#"{decl}
<p:sldLayout xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}" type="blank">
{tree}
</p:sldLayout>"#,
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        tree = empty_shape_tree()
    )
}

fn slide_layout_rels_xml() -> String {
    format!(
        r#"{decl}
<Relationships xmlns="{rels}">
<Relationship Id="rId1" Type="{base}/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#,
        decl = XML_DECL,
        rels = NS_PKG_RELS,
        base = REL_BASE
    )
}

fn slide_rels_xml() -> String {
    format!(
        r#"{decl}
<Relationships xmlns="{rels}">
<Relationship Id="rId1" Type="{base}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#,
        decl = XML_DECL,
        rels = NS_PKG_RELS,
        base = REL_BASE
    )
}

fn theme_xml() -> String {
    let face = DECK_FONT_FACE;
    format!(
        r#"{decl}
<a:theme xmlns:a="{a}" name="Slidecraft">
<a:themeElements>
<a:clrScheme name="Slidecraft">
<a:dk1><a:srgbClr val="000000"/></a:dk1><a:lt1><a:srgbClr val="FFFFFF"/></a:lt1>
<a:dk2><a:srgbClr val="1F2937"/></a:dk2><a:lt2><a:srgbClr val="F4F4F5"/></a:lt2>
<a:accent1><a:srgbClr val="3B82F6"/></a:accent1><a:accent2><a:srgbClr val="10B981"/></a:accent2>
<a:accent3><a:srgbClr val="9CA3AF"/></a:accent3><a:accent4><a:srgbClr val="F97316"/></a:accent4>
<a:accent5><a:srgbClr val="A855F7"/></a:accent5><a:accent6><a:srgbClr val="18181B"/></a:accent6>
<a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
</a:clrScheme>
<a:fontScheme name="Slidecraft">
<a:majorFont><a:latin typeface="{face}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
<a:minorFont><a:latin typeface="{face}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
</a:fontScheme>
<a:fmtScheme name="Slidecraft">
<a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst>
<a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst>
<a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>
<a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst>
</a:fmtScheme>
</a:themeElements>
</a:theme>"#,
        decl = XML_DECL,
        a = NS_A,
        face = face
    )
}

// --- Slide shapes ---

/// Position and size of a shape, in inches.
struct Frame {
    x: f64,
    y: f64,
    cx: f64,
    cy: f64,
}

impl Frame {
    fn xfrm(&self) -> String {
        format!(
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            emu(self.x),
            emu(self.y),
            emu(self.cx),
            emu(self.cy)
        )
    }
}

const TITLE_FRAME: Frame = Frame { x: 0.5, y: 0.5, cx: 9.0, cy: 1.0 };
const ACCENT_FRAME: Frame = Frame { x: 0.5, y: 1.6, cx: 9.0, cy: 0.05 };
const BODY_FRAME: Frame = Frame { x: 0.5, y: 2.0, cx: 9.0, cy: 3.5 };

fn run_properties(size_pt: u32, bold: bool, color: &str) -> String {
    format!(
        r#"<a:rPr lang="en-US" sz="{}"{} dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:latin typeface="{}"/></a:rPr>"#,
        size_pt * 100,
        if bold { r#" b="1""# } else { "" },
        color,
        DECK_FONT_FACE
    )
}

fn text_box(
    xml: &mut String,
    shape_id: u32,
    name: &str,
    frame: &Frame,
    anchor: &str,
    paragraphs: &str,
) -> Result<()> {
    write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="{}"><a:normAutofit/></a:bodyPr><a:lstStyle/>{}</p:txBody></p:sp>"#,
        shape_id,
        name,
        frame.xfrm(),
        anchor,
        paragraphs
    )?;
    Ok(())
}

/// One `<a:p>` per content line; blank lines become empty paragraphs.
fn body_paragraphs(slide: &Slide, color: &str) -> Result<String> {
    let props = run_properties(DECK_BODY_SIZE_PT, false, color);
    let end_props = format!(r#"<a:endParaRPr lang="en-US" sz="{}"/>"#, DECK_BODY_SIZE_PT * 100);
    let lines = slide.trimmed_lines();
    let mut xml = String::new();
    if lines.is_empty() {
        write!(xml, r#"<a:p><a:pPr algn="l"/>{}</a:p>"#, end_props)?;
    }
    for line in lines {
        if line.trim().is_empty() {
            write!(xml, r#"<a:p><a:pPr algn="l"/>{}</a:p>"#, end_props)?;
        } else {
            write!(
                xml,
                r#"<a:p><a:pPr algn="l"/><a:r>{}<a:t>{}</a:t></a:r></a:p>"#,
                props,
                escape_xml(line)
            )?;
        }
    }
    Ok(xml)
}

fn slide_xml(slide: &Slide, colors: &DeckColors) -> Result<String> {
    let mut shapes = String::new();

    let title = format!(
        r#"<a:p><a:r>{}<a:t>{}</a:t></a:r></a:p>"#,
        run_properties(DECK_TITLE_SIZE_PT, true, &colors.text),
        escape_xml(&slide.title)
    );
    text_box(&mut shapes, 2, "Title", &TITLE_FRAME, "t", &title)?;

    write!(
        shapes,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Accent"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr></p:sp>"#,
        ACCENT_FRAME.xfrm(),
        colors.accent
    )?;

    let body = body_paragraphs(slide, &colors.text)?;
    text_box(&mut shapes, 4, "Content", &BODY_FRAME, "t", &body)?;

    Ok(format!(
        r#"{decl}
<p:sld xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">
<p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="{bg}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>
<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{shapes}</p:spTree></p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        bg = colors.background,
        shapes = shapes
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::ThemeId;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();
        xml
    }

    fn deck() -> Presentation {
        Presentation::new_with_slides(
            "Ward Rounds & Review",
            vec![
                Slide::with_id("s1", "Intro", "\n\n• First\n\n• Second\n\n"),
                Slide::with_id("s2", "<Empty>", ""),
            ],
            ThemeId::MedicalGreen,
        )
    }

    #[test]
    fn package_contains_one_part_per_slide() {
        let bytes = render_pptx(&deck(), &ExportConfig::default()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"ppt/slides/slide1.xml"));
        assert!(names.contains(&"ppt/slides/slide2.xml"));
        assert!(!names.contains(&"ppt/slides/slide3.xml"));

        let presentation = read_part(&bytes, "ppt/presentation.xml");
        assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));
        assert_eq!(presentation.matches("<p:sldId ").count(), 2);
    }

    #[test]
    fn metadata_comes_from_config() {
        let config = ExportConfig {
            author: "Dr. Ames".to_string(),
            company: "St. Mary's".to_string(),
        };
        let bytes = render_pptx(&deck(), &config).unwrap();
        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Ward Rounds &amp; Review</dc:title>"));
        assert!(core.contains("<dc:creator>Dr. Ames</dc:creator>"));
        let app = read_part(&bytes, "docProps/app.xml");
        assert!(app.contains("<Company>St. Mary&apos;s</Company>"));
    }

    #[test]
    fn slide_uses_theme_colors_and_trimmed_body() {
        let bytes = render_pptx(&deck(), &ExportConfig::default()).unwrap();
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        // medical green: background #065f46, accent #6ee7b7, text #ffffff
        assert!(slide.contains(r#"<a:srgbClr val="065F46"/></a:solidFill><a:effectLst/>"#));
        assert!(slide.contains(r#"<a:srgbClr val="6EE7B7"/></a:solidFill><a:ln><a:noFill/></a:ln>"#));
        assert!(slide.contains(r#"sz="4400" b="1""#));
        assert!(slide.contains(r#"<a:off x="457200" y="1463040"/>"#));
        assert_eq!(slide.matches("<a:p>").count(), 4);
        assert!(slide.contains("<a:t>• First</a:t>"));
        assert!(slide.contains("<a:t>• Second</a:t>"));

        let empty = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(empty.contains("<a:t>&lt;Empty&gt;</a:t>"));
        assert!(empty.contains("<a:endParaRPr"));
    }

    #[test]
    fn empty_deck_is_a_package_without_slides() {
        let empty = Presentation::new_with_slides("Blank", Vec::new(), ThemeId::default());
        let bytes = render_pptx(&empty, &ExportConfig::default()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        assert!(!archive.file_names().any(|n| n.starts_with("ppt/slides/")));

        let presentation = read_part(&bytes, "ppt/presentation.xml");
        assert!(presentation.contains("<p:sldIdLst></p:sldIdLst>"));
    }
}
