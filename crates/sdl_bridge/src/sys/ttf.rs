//! SDL3_ttf entry point table

use std::ffi::{c_char, c_int};

use super::types::*;
use crate::pixels::Color;

native_api! {
    /// Function pointers resolved from the SDL3_ttf shared library
    pub struct TtfApi {
        fn TTF_Version() -> c_int;
        fn TTF_Init() -> bool;
        fn TTF_WasInit() -> c_int;
        fn TTF_Quit();

        // fonts
        fn TTF_OpenFont(file: *const c_char, ptsize: f32) -> *mut TTF_Font;
        fn TTF_OpenFontIO(src: *mut SDL_IOStream, closeio: bool, ptsize: f32) -> *mut TTF_Font;
        fn TTF_OpenFontWithProperties(props: SDL_PropertiesID) -> *mut TTF_Font;
        fn TTF_CopyFont(existing: *mut TTF_Font) -> *mut TTF_Font;
        fn TTF_CloseFont(font: *mut TTF_Font);
        fn TTF_GetFontProperties(font: *mut TTF_Font) -> SDL_PropertiesID;
        fn TTF_GetFontGeneration(font: *mut TTF_Font) -> u32;
        fn TTF_SetFontSize(font: *mut TTF_Font, ptsize: f32) -> bool;
        fn TTF_SetFontSizeDPI(font: *mut TTF_Font, ptsize: f32, hdpi: c_int, vdpi: c_int) -> bool;
        fn TTF_GetFontSize(font: *mut TTF_Font) -> f32;
        fn TTF_GetFontDPI(font: *mut TTF_Font, hdpi: *mut c_int, vdpi: *mut c_int) -> bool;
        fn TTF_SetFontStyle(font: *mut TTF_Font, style: u32);
        fn TTF_GetFontStyle(font: *mut TTF_Font) -> u32;
        fn TTF_SetFontOutline(font: *mut TTF_Font, outline: c_int) -> bool;
        fn TTF_GetFontOutline(font: *mut TTF_Font) -> c_int;
        fn TTF_SetFontHinting(font: *mut TTF_Font, hinting: c_int);
        fn TTF_GetFontHinting(font: *mut TTF_Font) -> c_int;
        fn TTF_SetFontSDF(font: *mut TTF_Font, enabled: bool) -> bool;
        fn TTF_GetFontSDF(font: *mut TTF_Font) -> bool;
        fn TTF_SetFontWrapAlignment(font: *mut TTF_Font, align: c_int);
        fn TTF_GetFontWrapAlignment(font: *mut TTF_Font) -> c_int;
        fn TTF_GetFontHeight(font: *mut TTF_Font) -> c_int;
        fn TTF_GetFontAscent(font: *mut TTF_Font) -> c_int;
        fn TTF_GetFontDescent(font: *mut TTF_Font) -> c_int;
        fn TTF_SetFontLineSkip(font: *mut TTF_Font, lineskip: c_int);
        fn TTF_GetFontLineSkip(font: *mut TTF_Font) -> c_int;
        fn TTF_SetFontKerning(font: *mut TTF_Font, enabled: bool);
        fn TTF_GetFontKerning(font: *mut TTF_Font) -> bool;
        fn TTF_FontIsFixedWidth(font: *mut TTF_Font) -> bool;
        fn TTF_FontIsScalable(font: *mut TTF_Font) -> bool;
        fn TTF_GetFontFamilyName(font: *mut TTF_Font) -> *const c_char;
        fn TTF_GetFontStyleName(font: *mut TTF_Font) -> *const c_char;
        fn TTF_SetFontDirection(font: *mut TTF_Font, direction: c_int) -> bool;
        fn TTF_GetFontDirection(font: *mut TTF_Font) -> c_int;
        fn TTF_StringToTag(string: *const c_char) -> u32;
        fn TTF_SetFontScript(font: *mut TTF_Font, script: u32) -> bool;
        fn TTF_GetFontScript(font: *mut TTF_Font) -> u32;
        fn TTF_SetFontLanguage(font: *mut TTF_Font, language_bcp47: *const c_char) -> bool;
        fn TTF_FontHasGlyph(font: *mut TTF_Font, ch: u32) -> bool;
        fn TTF_GetGlyphMetrics(font: *mut TTF_Font, ch: u32, minx: *mut c_int, maxx: *mut c_int, miny: *mut c_int, maxy: *mut c_int, advance: *mut c_int) -> bool;
        fn TTF_GetGlyphKerning(font: *mut TTF_Font, previous_ch: u32, ch: u32, kerning: *mut c_int) -> bool;
        fn TTF_GetStringSize(font: *mut TTF_Font, text: *const c_char, length: usize, w: *mut c_int, h: *mut c_int) -> bool;
        fn TTF_GetStringSizeWrapped(font: *mut TTF_Font, text: *const c_char, length: usize, wrap_width: c_int, w: *mut c_int, h: *mut c_int) -> bool;
        fn TTF_MeasureString(font: *mut TTF_Font, text: *const c_char, length: usize, max_width: c_int, measured_width: *mut c_int, measured_length: *mut usize) -> bool;

        // rendering to surfaces
        fn TTF_RenderText_Solid(font: *mut TTF_Font, text: *const c_char, length: usize, fg: Color) -> *mut SDL_Surface;
        fn TTF_RenderText_Solid_Wrapped(font: *mut TTF_Font, text: *const c_char, length: usize, fg: Color, wrap_length: c_int) -> *mut SDL_Surface;
        fn TTF_RenderText_Shaded(font: *mut TTF_Font, text: *const c_char, length: usize, fg: Color, bg: Color) -> *mut SDL_Surface;
        fn TTF_RenderText_Shaded_Wrapped(font: *mut TTF_Font, text: *const c_char, length: usize, fg: Color, bg: Color, wrap_width: c_int) -> *mut SDL_Surface;
        fn TTF_RenderText_Blended(font: *mut TTF_Font, text: *const c_char, length: usize, fg: Color) -> *mut SDL_Surface;
        fn TTF_RenderText_Blended_Wrapped(font: *mut TTF_Font, text: *const c_char, length: usize, fg: Color, wrap_width: c_int) -> *mut SDL_Surface;
        fn TTF_RenderText_LCD(font: *mut TTF_Font, text: *const c_char, length: usize, fg: Color, bg: Color) -> *mut SDL_Surface;
        fn TTF_RenderText_LCD_Wrapped(font: *mut TTF_Font, text: *const c_char, length: usize, fg: Color, bg: Color, wrap_width: c_int) -> *mut SDL_Surface;
        fn TTF_RenderGlyph_Blended(font: *mut TTF_Font, ch: u32, fg: Color) -> *mut SDL_Surface;

        // text engines
        fn TTF_CreateSurfaceTextEngine() -> *mut TTF_TextEngine;
        fn TTF_DrawSurfaceText(text: *mut TTF_Text, x: c_int, y: c_int, surface: *mut SDL_Surface) -> bool;
        fn TTF_DestroySurfaceTextEngine(engine: *mut TTF_TextEngine);
        fn TTF_CreateRendererTextEngine(renderer: *mut SDL_Renderer) -> *mut TTF_TextEngine;
        fn TTF_DrawRendererText(text: *mut TTF_Text, x: f32, y: f32) -> bool;
        fn TTF_DestroyRendererTextEngine(engine: *mut TTF_TextEngine);

        // text objects
        fn TTF_CreateText(engine: *mut TTF_TextEngine, font: *mut TTF_Font, text: *const c_char, length: usize) -> *mut TTF_Text;
        fn TTF_GetTextProperties(text: *mut TTF_Text) -> SDL_PropertiesID;
        fn TTF_SetTextEngine(text: *mut TTF_Text, engine: *mut TTF_TextEngine) -> bool;
        fn TTF_SetTextFont(text: *mut TTF_Text, font: *mut TTF_Font) -> bool;
        fn TTF_SetTextDirection(text: *mut TTF_Text, direction: c_int) -> bool;
        fn TTF_GetTextDirection(text: *mut TTF_Text) -> c_int;
        fn TTF_SetTextScript(text: *mut TTF_Text, script: u32) -> bool;
        fn TTF_GetTextScript(text: *mut TTF_Text) -> u32;
        fn TTF_SetTextColor(text: *mut TTF_Text, r: u8, g: u8, b: u8, a: u8) -> bool;
        fn TTF_SetTextColorFloat(text: *mut TTF_Text, r: f32, g: f32, b: f32, a: f32) -> bool;
        fn TTF_GetTextColor(text: *mut TTF_Text, r: *mut u8, g: *mut u8, b: *mut u8, a: *mut u8) -> bool;
        fn TTF_SetTextPosition(text: *mut TTF_Text, x: c_int, y: c_int) -> bool;
        fn TTF_GetTextPosition(text: *mut TTF_Text, x: *mut c_int, y: *mut c_int) -> bool;
        fn TTF_SetTextWrapWidth(text: *mut TTF_Text, wrap_width: c_int) -> bool;
        fn TTF_GetTextWrapWidth(text: *mut TTF_Text, wrap_width: *mut c_int) -> bool;
        fn TTF_SetTextWrapWhitespaceVisible(text: *mut TTF_Text, visible: bool) -> bool;
        fn TTF_TextWrapWhitespaceVisible(text: *mut TTF_Text) -> bool;
        fn TTF_SetTextString(text: *mut TTF_Text, string: *const c_char, length: usize) -> bool;
        fn TTF_InsertTextString(text: *mut TTF_Text, offset: c_int, string: *const c_char, length: usize) -> bool;
        fn TTF_AppendTextString(text: *mut TTF_Text, string: *const c_char, length: usize) -> bool;
        fn TTF_DeleteTextString(text: *mut TTF_Text, offset: c_int, length: c_int) -> bool;
        fn TTF_GetTextSize(text: *mut TTF_Text, w: *mut c_int, h: *mut c_int) -> bool;
        fn TTF_UpdateText(text: *mut TTF_Text) -> bool;
        fn TTF_DestroyText(text: *mut TTF_Text);
    }
}
